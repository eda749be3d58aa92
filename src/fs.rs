//! File helpers shared by the generators and the icon pipeline

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ProjkitResult;

/// Write content to a file atomically
///
/// Writes into a temp file in the destination directory, then renames it
/// over the target, so readers never observe a half-written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> ProjkitResult<()> {
    atomic_write_with(path, |file| file.write_all(content))
}

/// Like [`atomic_write`], but lets the caller stream into the temp file
pub fn atomic_write_with<F>(path: &Path, write: F) -> ProjkitResult<()>
where
    F: FnOnce(&mut NamedTempFile) -> std::io::Result<()>,
{
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    write(&mut tmp)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Remove files, logging (not failing) on errors. Returns the removed paths.
pub fn remove_files_best_effort<'a, I>(paths: I) -> Vec<&'a Path>
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut removed = Vec::new();
    for path in paths {
        match std::fs::remove_file(path) {
            Ok(()) => removed.push(path),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not remove file"),
        }
    }
    removed
}
