//! Test environment for isolated projkit runs.
//!
//! Provides `TestEnv` - a temp project root plus helpers to run the projkit
//! binary against it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a projkit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory with a fresh `resources/icons`
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().expect("Failed to create temp project");
        std::fs::create_dir_all(project_root.path().join("resources/icons"))
            .expect("Failed to create icon dir");
        Self {
            project_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_projkit")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path inside the default icon directory
    pub fn icon_path(&self, file_name: &str) -> PathBuf {
        self.project_path("resources/icons").join(file_name)
    }

    /// Write `projkit.toml`
    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.project_path("projkit.toml"), toml).expect("Failed to write config");
    }

    /// Run projkit with `--project <root>` prepended
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("--project")
            .arg(self.project_root.path())
            .args(args)
            .env_remove("PROJKIT_ICON_DIR")
            .env_remove("PROJKIT_ICON_PACK")
            .env_remove("PROJKIT_BUILD_TYPE")
            .env_remove("PROJKIT_LOG");

        let output = cmd.output().expect("Failed to execute projkit");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// File names in the icon directory starting with `app_icon_`
    pub fn leftover_variants(&self) -> Vec<String> {
        list_with_prefix(&self.project_path("resources/icons"), "app_icon_")
    }
}

fn list_with_prefix(dir: &Path, prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with(prefix))
        .collect();
    names.sort();
    names
}
