//! File system helpers for workspace scaffolding.

use std::fs;
use std::io;
use std::path::Path;

/// What `ensure_dir` found or did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existing,
}

/// Create `path` (and missing parents) unless it is already a directory.
///
/// An existing directory is never touched. A non-directory entry at `path`
/// is reported as `AlreadyExists`.
pub fn ensure_dir(path: &Path) -> io::Result<DirStatus> {
    if path.is_dir() {
        return Ok(DirStatus::Existing);
    }
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists and is not a directory",
        ));
    }
    fs::create_dir_all(path)?;
    Ok(DirStatus::Created)
}

/// Check if a regular file exists at `dir/relative`.
pub fn has_file(dir: &Path, relative: impl AsRef<Path>) -> bool {
    dir.join(relative).is_file()
}
