//! Build File Generators
//!
//! Each generator turns the manifest into files for the downstream build
//! tool. Generators never touch the disk; `generate_build_files` writes
//! what they return.

pub mod cmake_deps;
pub mod toolchain;

pub use cmake_deps::CMakeDepsGenerator;
pub use toolchain::ToolchainGenerator;

use std::path::PathBuf;

use crate::config::LayoutConfig;

use super::Manifest;

/// A generated file, relative to the output root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    path: PathBuf,
    content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Produces build-system integration files from a manifest
pub trait BuildFileGenerator {
    /// Generator name (for logging)
    fn name(&self) -> &'static str;

    /// Render all files this generator is responsible for
    fn generate(&self, manifest: &Manifest, layout: &LayoutConfig) -> Vec<GeneratedFile>;
}

/// Get all generators, in the order they run
pub fn all_generators() -> Vec<Box<dyn BuildFileGenerator>> {
    vec![
        Box::new(CMakeDepsGenerator::new()),
        Box::new(ToolchainGenerator::new()),
    ]
}

/// Header line shared by every generated file
pub(crate) fn header(comment: &str, subject: &str) -> String {
    format!("{} Generated by projkit for {}. Do not edit.\n", comment, subject)
}
