//! Producing one size variant
//!
//! Raster sources are resized in-process with a Lanczos3 filter; vector
//! sources go through the rasterizer chain. Either way the result is a PNG of
//! exactly `size`x`size` pixels.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::config::MAX_ICON_SIZE;
use crate::error::{ProjkitError, ProjkitResult};

use super::rasterize::RasterizerChain;
use super::source::{SourceFormat, SourceIcon};

/// Render `source` into a `size`x`size` PNG at `output`.
///
/// Returns the name of whatever produced the pixels (`"lanczos3"` for raster
/// sources, the rasterizer name for SVG).
pub fn convert_to_png(
    source: &SourceIcon,
    output: &Path,
    size: u32,
    rasterizers: &RasterizerChain,
) -> ProjkitResult<&'static str> {
    if size == 0 || size > MAX_ICON_SIZE {
        return Err(ProjkitError::InvalidSize { size });
    }

    match source.format {
        SourceFormat::Svg => {
            let tool = rasterizers.rasterize(&source.path, output, size)?;
            enforce_square(&source.path, output, size)?;
            Ok(tool)
        }
        SourceFormat::Png => {
            resize_raster(&source.path, output, size, false)?;
            Ok("lanczos3")
        }
        SourceFormat::Jpeg => {
            resize_raster(&source.path, output, size, true)?;
            Ok("lanczos3")
        }
    }
}

fn resize_raster(input: &Path, output: &Path, size: u32, force_alpha: bool) -> ProjkitResult<()> {
    let failure = |e: image::ImageError| ProjkitError::ResizeFailure {
        source_path: input.to_path_buf(),
        size,
        message: e.to_string(),
    };

    let img = image::open(input).map_err(failure)?;
    let img = if force_alpha && !matches!(img, DynamicImage::ImageRgba8(_)) {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        img
    };

    img.resize_exact(size, size, FilterType::Lanczos3)
        .save_with_format(output, ImageFormat::Png)
        .map_err(failure)
}

/// Rasterizers may honour the aspect ratio of a non-square SVG; stretch the
/// result so every variant has the requested dimensions.
fn enforce_square(svg: &Path, output: &Path, size: u32) -> ProjkitResult<()> {
    let failure = |e: image::ImageError| ProjkitError::ResizeFailure {
        source_path: svg.to_path_buf(),
        size,
        message: e.to_string(),
    };

    let img = image::open(output).map_err(failure)?;
    if img.width() == size && img.height() == size {
        return Ok(());
    }

    tracing::debug!(
        width = img.width(),
        height = img.height(),
        size,
        "rasterizer output not square, resizing"
    );
    img.resize_exact(size, size, FilterType::Lanczos3)
        .save_with_format(output, ImageFormat::Png)
        .map_err(failure)
}
