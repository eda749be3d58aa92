//! Source icon selection
//!
//! Candidates are an explicit ordered list of `(file name, format)` pairs;
//! the first one present on disk wins.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ProjkitError, ProjkitResult};

/// Format of a source icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Svg,
    Png,
    Jpeg,
}

impl SourceFormat {
    /// Detect from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Svg)
    }
}

/// A selected source icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIcon {
    pub path: PathBuf,
    pub format: SourceFormat,
}

impl SourceIcon {
    pub fn from_path(path: impl Into<PathBuf>) -> ProjkitResult<Self> {
        let path = path.into();
        match SourceFormat::from_path(&path) {
            Some(format) => Ok(Self { path, format }),
            None => Err(ProjkitError::UnsupportedFormat { path }),
        }
    }
}

/// One probe location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub file_name: String,
    pub format: SourceFormat,
}

/// Candidates for `base_name`, highest priority first
pub fn candidates(base_name: &str) -> Vec<Candidate> {
    [
        ("svg", SourceFormat::Svg),
        ("png", SourceFormat::Png),
        ("jpg", SourceFormat::Jpeg),
        ("jpeg", SourceFormat::Jpeg),
    ]
    .into_iter()
    .map(|(ext, format)| Candidate {
        file_name: format!("{}.{}", base_name, ext),
        format,
    })
    .collect()
}

/// Pick the first candidate that exists in `dir`
pub fn select_input(dir: &Path, base_name: &str) -> ProjkitResult<SourceIcon> {
    let candidates = candidates(base_name);

    for candidate in &candidates {
        let path = dir.join(&candidate.file_name);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "selected icon source");
            return Ok(SourceIcon {
                path,
                format: candidate.format,
            });
        }
        tracing::trace!(path = %path.display(), "icon candidate missing");
    }

    Err(ProjkitError::NoInputFound {
        dir: dir.to_path_buf(),
        candidates: candidates.into_iter().map(|c| c.file_name).collect(),
    })
}
