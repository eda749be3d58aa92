//! Test fixtures - image writers and config snippets.

#![allow(dead_code)]

use std::path::Path;
use std::time::{Duration, SystemTime};

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

/// Minimal SVG; never actually parsed by the fake rasterizers
pub const SIMPLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="red"/></svg>"#;

/// Default icon sizes
pub const SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

pub fn write_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([40, 120, 200, 255]))
        .save_with_format(path, ImageFormat::Png)
        .expect("Failed to write png");
}

pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([200, 120, 40]))
        .save_with_format(path, ImageFormat::Jpeg)
        .expect("Failed to write jpeg");
}

/// Move a file's mtime `secs` seconds into the past
pub fn age_file(path: &Path, secs: u64) {
    std::fs::File::options()
        .write(true)
        .open(path)
        .expect("Failed to open file")
        .set_modified(SystemTime::now() - Duration::from_secs(secs))
        .expect("Failed to set mtime");
}
