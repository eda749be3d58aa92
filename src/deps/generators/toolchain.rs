//! Toolchain file generator
//!
//! Emits `projkit_toolchain.cmake` under the generators directory. The user
//! presets file (`CMakeUserPresets.json` at the output root) is only written
//! when `toolchain.user_presets` is enabled.

use std::path::Path;

use crate::config::LayoutConfig;
use crate::deps::Manifest;

use super::{header, BuildFileGenerator, GeneratedFile};

/// Toolchain file name inside the generators directory
pub const TOOLCHAIN_FILE: &str = "projkit_toolchain.cmake";

/// User presets file name at the output root
pub const USER_PRESETS_FILE: &str = "CMakeUserPresets.json";

/// CMake toolchain generator
pub struct ToolchainGenerator;

impl ToolchainGenerator {
    pub fn new() -> Self {
        Self
    }

    fn toolchain_file(&self, manifest: &Manifest) -> String {
        let package = format!("{}/{}", manifest.package.name, manifest.package.version);
        let settings = &manifest.settings;

        let mut out = header("#", &package);
        out.push('\n');
        out.push_str("if(NOT CMAKE_BUILD_TYPE)\n");
        out.push_str(&format!(
            "    set(CMAKE_BUILD_TYPE \"{}\" CACHE STRING \"Build type\" FORCE)\n",
            settings.build_type
        ));
        out.push_str("endif()\n");
        out.push_str(&format!("set(PROJKIT_ARCH \"{}\")\n", settings.arch));
        out.push('\n');
        out.push_str("list(PREPEND CMAKE_PREFIX_PATH \"${CMAKE_CURRENT_LIST_DIR}\")\n");
        out.push_str("list(PREPEND CMAKE_MODULE_PATH \"${CMAKE_CURRENT_LIST_DIR}\")\n");
        out.push('\n');

        let packages: Vec<&str> = manifest
            .visible_dependencies()
            .map(|d| d.name.as_str())
            .collect();
        out.push_str(&cmake_list("PROJKIT_PACKAGES", &packages));

        let build_only: Vec<String> = manifest
            .declare_build_only_dependencies()
            .iter()
            .map(|r| r.reference())
            .collect();
        let build_only: Vec<&str> = build_only.iter().map(String::as_str).collect();
        out.push_str(&cmake_list("PROJKIT_BUILD_REQUIRES", &build_only));
        out
    }

    fn user_presets(&self, manifest: &Manifest, layout: &LayoutConfig) -> String {
        let build_type = &manifest.settings.build_type;
        let toolchain = Path::new("${sourceDir}").join(&layout.generators).join(TOOLCHAIN_FILE);
        let binary_dir = Path::new("${sourceDir}").join(&layout.build);

        let presets = serde_json::json!({
            "version": 3,
            "vendor": {
                "projkit": {
                    "package": format!("{}/{}", manifest.package.name, manifest.package.version)
                }
            },
            "configurePresets": [{
                "name": format!("projkit-{}", build_type.to_lowercase()),
                "displayName": format!("projkit {}", build_type),
                "binaryDir": slash_path(&binary_dir),
                "toolchainFile": slash_path(&toolchain),
                "cacheVariables": {
                    "CMAKE_BUILD_TYPE": build_type
                }
            }]
        });

        // json! values always serialize
        let mut out = serde_json::to_string_pretty(&presets).unwrap_or_default();
        out.push('\n');
        out
    }
}

impl Default for ToolchainGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildFileGenerator for ToolchainGenerator {
    fn name(&self) -> &'static str {
        "cmake-toolchain"
    }

    fn generate(&self, manifest: &Manifest, layout: &LayoutConfig) -> Vec<GeneratedFile> {
        let mut files = vec![GeneratedFile::new(
            layout.generators.join(TOOLCHAIN_FILE),
            self.toolchain_file(manifest),
        )];

        if manifest.toolchain.user_presets {
            files.push(GeneratedFile::new(
                USER_PRESETS_FILE,
                self.user_presets(manifest, layout),
            ));
        }

        files
    }
}

fn cmake_list(var: &str, items: &[&str]) -> String {
    if items.is_empty() {
        format!("set({} \"\")\n", var)
    } else {
        format!("set({} {})\n", var, items.join(" "))
    }
}

/// CMake wants forward slashes even on Windows
fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, RequirementEntry};
    use crate::deps::DependencySpec;
    use std::path::PathBuf;

    fn manifest(config: &Config) -> Manifest {
        Manifest::from_config(config)
    }

    #[test]
    fn default_emits_only_toolchain_file() {
        let files = ToolchainGenerator::new()
            .generate(&manifest(&Config::default()), &LayoutConfig::default());

        assert_eq!(files.len(), 1);
        assert_eq!(
            files[0].path(),
            &PathBuf::from("build/generators/projkit_toolchain.cmake")
        );
    }

    #[test]
    fn toolchain_sets_build_type_and_prefix_path() {
        let mut config = Config::default();
        config.settings.build_type = "Debug".to_string();
        config.settings.arch = "armv8".to_string();

        let content = ToolchainGenerator::new().toolchain_file(&manifest(&config));

        assert!(content.contains("set(CMAKE_BUILD_TYPE \"Debug\" CACHE STRING \"Build type\" FORCE)"));
        assert!(content.contains("set(PROJKIT_ARCH \"armv8\")"));
        assert!(content.contains("list(PREPEND CMAKE_PREFIX_PATH \"${CMAKE_CURRENT_LIST_DIR}\")"));
        assert!(content.starts_with("# Generated by projkit for qt-template/1.0.1. Do not edit.\n"));
    }

    #[test]
    fn toolchain_lists_only_visible_packages() {
        let mut config = Config::default();
        config.requires.push(DependencySpec::new("spdlog", "1.13.0"));
        config.requires.push(DependencySpec::new("gtest", "1.14.0").hidden());
        config.tool_requires.push(RequirementEntry {
            name: "cmake".to_string(),
            version: "3.28.1".to_string(),
        });

        let content = ToolchainGenerator::new().toolchain_file(&manifest(&config));

        assert!(content.contains("set(PROJKIT_PACKAGES fmt spdlog)\n"));
        assert!(content.contains("set(PROJKIT_BUILD_REQUIRES cmake/3.28.1)\n"));
    }

    #[test]
    fn empty_lists_are_quoted() {
        assert_eq!(cmake_list("X", &[]), "set(X \"\")\n");
    }

    #[test]
    fn user_presets_written_when_enabled() {
        let mut config = Config::default();
        config.toolchain.user_presets = true;

        let files =
            ToolchainGenerator::new().generate(&manifest(&config), &LayoutConfig::default());
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].path(), &PathBuf::from(USER_PRESETS_FILE));

        let presets: serde_json::Value = serde_json::from_str(files[1].content()).unwrap();
        let preset = &presets["configurePresets"][0];
        assert_eq!(preset["name"], "projkit-release");
        assert_eq!(
            preset["toolchainFile"],
            "${sourceDir}/build/generators/projkit_toolchain.cmake"
        );
        assert_eq!(preset["binaryDir"], "${sourceDir}/build");
    }
}
