//! Directory scaffolding under the workspace root.

use std::path::{Path, PathBuf};

use boot_core::boot_info;
use boot_core::error::{BootError, Result};
use boot_core::file_system::{ensure_dir, DirStatus};
use boot_messages::{msg, MESSAGES};
use tracing::debug;

/// Which configured directories had to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

/// Make sure every directory in `dirs` exists below `root`.
///
/// Directories that already exist are left untouched, contents included.
/// The first failure aborts with `BootError::Workspace`.
pub fn initialize(root: &Path, dirs: &[PathBuf]) -> Result<WorkspaceReport> {
    let mut report = WorkspaceReport::default();

    for dir in dirs {
        let path = root.join(dir);
        match ensure_dir(&path) {
            Ok(DirStatus::Created) => {
                boot_info!(
                    "{}",
                    msg!(MESSAGES.workspace.created, path = dir.display().to_string())
                );
                report.created.push(dir.clone());
            }
            Ok(DirStatus::Existing) => {
                debug!(path = %path.display(), "directory already present");
                report.existing.push(dir.clone());
            }
            Err(source) => return Err(BootError::Workspace { path, source }),
        }
    }

    Ok(report)
}

/// Configured directories that do not exist yet. Touches nothing.
pub fn inspect(root: &Path, dirs: &[PathBuf]) -> Vec<PathBuf> {
    dirs.iter()
        .filter(|dir| !root.join(dir).is_dir())
        .cloned()
        .collect()
}
