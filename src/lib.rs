//! projkit - project asset and build dependency toolkit
//!
//! Two independent utilities for a desktop application project:
//! - [`icon`]: convert one source image into a multi-resolution ICO container
//! - [`deps`]: declare third-party dependencies and generate CMake integration files

pub mod config;
pub mod deps;
pub mod error;
pub mod fs;
pub mod icon;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use deps::{generate_build_files, DependencySpec, Manifest};
pub use error::{ProjkitError, ProjkitResult};
pub use icon::{convert_to_png, IconEvent, IconPipeline, PackMode, PipelineOutcome};
