//! Dependency declaration and build file generation
//!
//! Declares third-party requirements from `projkit.toml` and writes the
//! discovery and toolchain files a downstream CMake build consumes.

pub mod generators;
mod manifest;

pub use generators::{all_generators, BuildFileGenerator, GeneratedFile};
pub use manifest::{BuildRequirement, BuildRequirementKind, DependencySpec, Manifest};

use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::error::ProjkitResult;
use crate::fs::atomic_write;

/// Run every generator and write its files under `output_root`.
///
/// Returns the written paths in generation order. Any write failure aborts
/// and propagates.
pub fn generate_build_files(
    manifest: &Manifest,
    layout: &LayoutConfig,
    output_root: &Path,
) -> ProjkitResult<Vec<PathBuf>> {
    std::fs::create_dir_all(output_root.join(&layout.build))?;
    std::fs::create_dir_all(output_root.join(&layout.generators))?;

    let mut written = Vec::new();
    for generator in all_generators() {
        let files = generator.generate(manifest, layout);
        tracing::info!(
            generator = generator.name(),
            files = files.len(),
            "generating build files"
        );

        for file in files {
            let target = output_root.join(file.path());
            atomic_write(&target, file.content().as_bytes())?;
            tracing::debug!(path = %target.display(), "wrote generated file");
            written.push(target);
        }
    }

    Ok(written)
}
