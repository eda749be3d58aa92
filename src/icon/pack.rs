//! ICO container packing
//!
//! Variants are ordered by the size encoded in their file name
//! (`<name>_<size>.png`), converted to RGBA and embedded in an ICO
//! directory. `PackMode::Largest` keeps only the biggest variant, matching
//! the single-image containers older tooling produced.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use serde::{Deserialize, Serialize};

use crate::config::MAX_ICON_SIZE;
use crate::error::{ProjkitError, ProjkitResult};
use crate::fs::atomic_write_with;

/// Which variants end up in the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackMode {
    /// Every produced size
    #[default]
    All,
    /// Only the largest size
    Largest,
}

impl fmt::Display for PackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Largest => write!(f, "largest"),
        }
    }
}

impl FromStr for PackMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "largest" => Ok(Self::Largest),
            other => Err(format!("unknown pack mode '{}' (expected all or largest)", other)),
        }
    }
}

/// An intermediate PNG with its target size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeVariant {
    pub size: u32,
    pub path: PathBuf,
}

/// Parse the trailing `_<size>` of a file stem, e.g. `app_icon_48.png` → 48
pub fn size_from_file_name(path: &Path) -> Option<u32> {
    let stem = path.file_stem()?.to_str()?;
    let (_, size) = stem.rsplit_once('_')?;
    size.parse().ok()
}

/// Order variant files by their embedded size, ascending.
///
/// Files without a parseable size are skipped with a warning.
pub fn sort_variants(paths: &[PathBuf]) -> Vec<SizeVariant> {
    let mut variants: Vec<SizeVariant> = paths
        .iter()
        .filter_map(|path| match size_from_file_name(path) {
            Some(size) => Some(SizeVariant {
                size,
                path: path.clone(),
            }),
            None => {
                tracing::warn!(path = %path.display(), "no size in variant file name, skipping");
                None
            }
        })
        .collect();
    variants.sort_by_key(|v| v.size);
    variants
}

/// Pick the variants to embed for `mode`, from an ascending list
pub fn select_variants(sorted: &[SizeVariant], mode: PackMode) -> &[SizeVariant] {
    match mode {
        PackMode::All => sorted,
        PackMode::Largest => match sorted.len() {
            0 => sorted,
            n => &sorted[n - 1..],
        },
    }
}

/// Build `ico_path` from the variant files. Returns the embedded sizes.
pub fn pack_icon(variant_paths: &[PathBuf], ico_path: &Path, mode: PackMode) -> ProjkitResult<Vec<u32>> {
    let failure = |message: String| ProjkitError::ContainerWriteFailure {
        path: ico_path.to_path_buf(),
        message,
    };

    let sorted = sort_variants(variant_paths);
    let selected = select_variants(&sorted, mode);
    if selected.is_empty() {
        return Err(failure("no size variants to pack".to_string()));
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    let mut embedded = Vec::with_capacity(selected.len());

    for variant in selected {
        let rgba = image::open(&variant.path)
            .map_err(|e| failure(format!("{}: {}", variant.path.display(), e)))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 || width > MAX_ICON_SIZE || height > MAX_ICON_SIZE {
            return Err(failure(format!(
                "{} is {}x{}, containers hold at most {}x{}",
                variant.path.display(),
                width,
                height,
                MAX_ICON_SIZE,
                MAX_ICON_SIZE
            )));
        }

        let image = IconImage::from_rgba_data(width, height, rgba.into_raw());
        let entry = IconDirEntry::encode(&image)
            .map_err(|e| failure(format!("{}: {}", variant.path.display(), e)))?;
        icon_dir.add_entry(entry);
        embedded.push(width);
    }

    atomic_write_with(ico_path, |file| icon_dir.write(file))
        .map_err(|e| failure(e.to_string()))?;

    tracing::info!(path = %ico_path.display(), sizes = ?embedded, "wrote icon container");
    Ok(embedded)
}
