//! SVG Rasterization
//!
//! Vector sources are rendered by external tools. Tools are tried in order
//! (inkscape preferred, rsvg-convert fallback); the first success wins.

mod inkscape;
mod rsvg;

pub use inkscape::InkscapeRasterizer;
pub use rsvg::RsvgConvertRasterizer;

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Output;

use crate::config::RasterizersConfig;
use crate::error::{ProjkitError, ProjkitResult, RasterizeAttempt};

/// Why a single rasterizer attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterizeError {
    /// Program not found on PATH
    NotFound(PathBuf),
    /// Program ran and exited unsuccessfully
    Failed { status: String, stderr: String },
    /// Spawning or file handling failed for another reason
    Io(String),
}

impl fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(program) => write!(f, "{} not found", program.display()),
            Self::Failed { status, stderr } if stderr.is_empty() => write!(f, "{}", status),
            Self::Failed { status, stderr } => write!(f, "{}: {}", status, stderr),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for RasterizeError {}

impl RasterizeError {
    /// Classify a spawn error
    pub(crate) fn spawn(program: &Path, err: std::io::Error) -> Self {
        if err.kind() == ErrorKind::NotFound {
            Self::NotFound(program.to_path_buf())
        } else {
            Self::Io(err.to_string())
        }
    }

    /// Turn a finished process into `Ok` or `Failed`
    pub(crate) fn check(output: &Output) -> Result<(), Self> {
        if output.status.success() {
            return Ok(());
        }
        Err(Self::Failed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// A strategy that renders an SVG into a square PNG
pub trait Rasterizer {
    /// Tool name (for logging and error reports)
    fn name(&self) -> &'static str;

    /// Render `svg` into `output` at `size`x`size` pixels
    fn rasterize(&self, svg: &Path, output: &Path, size: u32) -> Result<(), RasterizeError>;
}

/// Ordered fallback chain of rasterizers
pub struct RasterizerChain {
    strategies: Vec<Box<dyn Rasterizer>>,
}

impl RasterizerChain {
    pub fn new(strategies: Vec<Box<dyn Rasterizer>>) -> Self {
        Self { strategies }
    }

    /// inkscape, then rsvg-convert, with programs from configuration
    pub fn from_config(config: &RasterizersConfig) -> Self {
        Self::new(vec![
            Box::new(InkscapeRasterizer::new(&config.inkscape)),
            Box::new(RsvgConvertRasterizer::new(&config.rsvg_convert)),
        ])
    }

    /// Names in preference order
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Try each strategy until one succeeds; returns the winning tool name.
    pub fn rasterize(&self, svg: &Path, output: &Path, size: u32) -> ProjkitResult<&'static str> {
        let mut attempts = Vec::new();

        for strategy in &self.strategies {
            match strategy.rasterize(svg, output, size) {
                Ok(()) => {
                    tracing::debug!(tool = strategy.name(), size, "rasterized svg");
                    return Ok(strategy.name());
                }
                Err(e) => {
                    tracing::info!(tool = strategy.name(), size, error = %e, "rasterizer failed, trying next");
                    attempts.push(RasterizeAttempt {
                        tool: strategy.name(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Err(ProjkitError::RasterizationFailure {
            source_path: svg.to_path_buf(),
            size,
            attempts,
        })
    }
}

impl Default for RasterizerChain {
    fn default() -> Self {
        Self::from_config(&RasterizersConfig::default())
    }
}
