//! Up-to-date check for the icon container
//!
//! A single mtime comparison: the container is fresh when it is at least as
//! new as its source.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::ProjkitResult;

/// `true` when `output` exists and is not older than `input`
pub fn is_up_to_date(input: &Path, output: &Path) -> ProjkitResult<bool> {
    let output_meta = match std::fs::metadata(output) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    let input_mtime = std::fs::metadata(input)?.modified()?;
    let output_mtime = output_meta.modified()?;

    Ok(output_mtime >= input_mtime)
}
