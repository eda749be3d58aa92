//! Integration tests for `projkit deps`.

mod common;

use common::*;

const CUSTOM_CONFIG: &str = r#"
[package]
name = "viewer"
version = "2.0.0"

[settings]
build_type = "Debug"

[toolchain]
user_presets = true

[[requires]]
name = "fmt"
version = "10.2.1"

[[requires]]
name = "zlib"
version = "1.3"
visible = false

[[tool_requires]]
name = "cmake"
version = "3.28.1"

[[test_requires]]
name = "gtest"
version = "1.14.0"
"#;

#[test]
fn generate_with_defaults_writes_fmt_and_toolchain() {
    let env = TestEnv::new();

    let result = env.run(&["deps", "generate"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("Generated 3 files for 1 dependencies"));
    assert!(env.project_path("build/generators/fmt-config.cmake").exists());
    assert!(env
        .project_path("build/generators/fmt-config-version.cmake")
        .exists());
    assert!(env
        .project_path("build/generators/projkit_toolchain.cmake")
        .exists());
    assert!(!env.project_path("CMakeUserPresets.json").exists());
}

#[test]
fn generate_with_custom_config() {
    let env = TestEnv::new();
    env.write_config(CUSTOM_CONFIG);

    let result = env.run(&["deps", "generate"]);

    assert!(result.success, "{}", result.combined_output());

    let zlib = std::fs::read_to_string(env.project_path("build/generators/zlib-config.cmake"))
        .unwrap();
    assert!(zlib.contains("set(zlib_VISIBLE OFF)"), "{}", zlib);

    let toolchain =
        std::fs::read_to_string(env.project_path("build/generators/projkit_toolchain.cmake"))
            .unwrap();
    assert!(toolchain.contains("CMAKE_BUILD_TYPE"));
    assert!(toolchain.contains("Debug"));
    assert!(toolchain.contains("cmake/3.28.1"));
    assert!(toolchain.contains("gtest/1.14.0"));

    let presets: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(env.project_path("CMakeUserPresets.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(presets["configurePresets"][0]["name"], "projkit-debug");
}

#[test]
fn generate_into_output_dir() {
    let env = TestEnv::new();
    let out = env.project_path("elsewhere");

    let result = env.run(&["deps", "generate", "--output-dir", out.to_str().unwrap()]);

    assert!(result.success, "{}", result.combined_output());
    assert!(out.join("build/generators/projkit_toolchain.cmake").exists());
    assert!(!env.project_path("build").exists());
}

#[test]
fn list_shows_runtime_then_build_only_requirements() {
    let env = TestEnv::new();
    env.write_config(CUSTOM_CONFIG);

    let result = env.run(&["deps", "list"]);

    assert!(result.success, "{}", result.combined_output());
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "fmt/10.2.1",
            "zlib/1.3 (not visible)",
            "cmake/3.28.1 (build-only: tool)",
            "gtest/1.14.0 (build-only: test)",
        ]
    );
}

#[test]
fn list_json() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "deps", "list"]);

    assert!(result.success, "{}", result.combined_output());
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "dependency");
    assert_eq!(event["reference"], "fmt/10.2.1");
    assert_eq!(event["visible"], true);
}

#[test]
fn unknown_key_warns_but_succeeds() {
    let env = TestEnv::new();
    env.write_config("[toolchain]\nuser_preset = true\n");

    let result = env.run(&["deps", "list"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key 'user_preset'"));
    assert!(result.stderr.contains("Did you mean 'user_presets'?"));
}

#[test]
fn invalid_dependency_name_fails() {
    let env = TestEnv::new();
    env.write_config("[[requires]]\nname = \"fmt/10\"\nversion = \"10\"\n");

    let result = env.run(&["deps", "generate"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid dependency name"), "{}", result.stderr);
    assert!(!env.project_path("build").exists());
}
