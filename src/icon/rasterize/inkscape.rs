//! Inkscape Rasterizer
//!
//! Preferred tool. Writes the PNG itself via `--export-filename`.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{RasterizeError, Rasterizer};

/// Rasterizer backed by the `inkscape` CLI (1.x argument style)
pub struct InkscapeRasterizer {
    program: PathBuf,
}

impl InkscapeRasterizer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, svg: &Path, output: &Path, size: u32) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--export-type=png")
            .arg(format!("--export-filename={}", output.display()))
            .arg(format!("--export-width={}", size))
            .arg(format!("--export-height={}", size))
            .arg(svg);
        cmd
    }
}

impl Rasterizer for InkscapeRasterizer {
    fn name(&self) -> &'static str {
        "inkscape"
    }

    fn rasterize(&self, svg: &Path, output: &Path, size: u32) -> Result<(), RasterizeError> {
        let result = self
            .command(svg, output, size)
            .output()
            .map_err(|e| RasterizeError::spawn(&self.program, e))?;
        RasterizeError::check(&result)
    }
}
