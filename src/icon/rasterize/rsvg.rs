//! rsvg-convert Rasterizer
//!
//! Fallback tool. Prints the PNG on stdout, which is redirected into the
//! output file.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::{RasterizeError, Rasterizer};

/// Rasterizer backed by `rsvg-convert` (librsvg)
pub struct RsvgConvertRasterizer {
    program: PathBuf,
}

impl RsvgConvertRasterizer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, svg: &Path, size: u32) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-w")
            .arg(size.to_string())
            .arg("-h")
            .arg(size.to_string())
            .arg(svg);
        cmd
    }
}

impl Rasterizer for RsvgConvertRasterizer {
    fn name(&self) -> &'static str {
        "rsvg-convert"
    }

    fn rasterize(&self, svg: &Path, output: &Path, size: u32) -> Result<(), RasterizeError> {
        let file = File::create(output).map_err(|e| RasterizeError::Io(e.to_string()))?;

        let result = self
            .command(svg, size)
            .stdout(Stdio::from(file))
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RasterizeError::spawn(&self.program, e))
            .and_then(|out| RasterizeError::check(&out));

        if result.is_err() {
            // Don't leave a truncated PNG behind for the next size or the packer
            let _ = std::fs::remove_file(output);
        }
        result
    }
}
