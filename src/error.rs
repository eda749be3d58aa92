//! Error types for projkit
//!
//! Uses `thiserror` for library errors. Command handlers in the binary wrap
//! these in `anyhow::Error`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for projkit operations
pub type ProjkitResult<T> = Result<T, ProjkitError>;

/// One failed rasterizer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterizeAttempt {
    /// Tool name, e.g. `inkscape`
    pub tool: &'static str,
    /// Why it failed (spawn error or exit status)
    pub reason: String,
}

/// Main error type for projkit operations
#[derive(Error, Debug)]
pub enum ProjkitError {
    /// None of the candidate icon sources exist
    #[error(
        "no supported icon file found in {dir} (tried {})",
        .candidates.join(", ")
    )]
    NoInputFound {
        dir: PathBuf,
        candidates: Vec<String>,
    },

    /// Every rasterizer in the chain failed for one size
    #[error(
        "could not rasterize {source_path} at {size}x{size}: {}",
        format_attempts(.attempts)
    )]
    RasterizationFailure {
        source_path: PathBuf,
        size: u32,
        attempts: Vec<RasterizeAttempt>,
    },

    /// Decoding, resizing or encoding a raster source failed
    #[error("could not resize {source_path} to {size}x{size}: {message}")]
    ResizeFailure {
        source_path: PathBuf,
        size: u32,
        message: String,
    },

    /// The icon container could not be written
    #[error("could not write icon container {path}: {message}")]
    ContainerWriteFailure { path: PathBuf, message: String },

    /// Input extension is not one of svg, png, jpg, jpeg
    #[error("unsupported icon format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Icon size outside what the container can encode
    #[error("invalid icon size {size} (must be between 1 and 256)")]
    InvalidSize { size: u32 },

    /// Invalid projkit.toml
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_attempts(attempts: &[RasterizeAttempt]) -> String {
    if attempts.is_empty() {
        return "no rasterizer configured".to_string();
    }
    attempts
        .iter()
        .map(|a| format!("{} ({})", a.tool, a.reason))
        .collect::<Vec<_>>()
        .join("; ")
}
