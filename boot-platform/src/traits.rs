//! Core trait for platform abstraction.

use anyhow::Result;
use std::path::PathBuf;

/// Platform-specific knowledge needed by the bootstrap.
pub trait PlatformProvider: Send + Sync {
    /// Get the platform name (e.g., "unix", "windows", "macos")
    fn name(&self) -> &'static str;

    // === Path Operations ===

    /// Get the user's configuration directory for the bootstrap
    fn user_config_dir(&self) -> Result<PathBuf>;

    // === Runtime Discovery ===

    /// Interpreter commands probed in order when none is configured
    fn runtime_candidates(&self) -> Vec<&'static str>;

    /// Where to send users whose runtime is missing
    fn runtime_download_url(&self) -> &'static str;

    // === Process Operations ===

    /// Split PATH environment variable into individual paths
    fn split_path_env(&self, path: &str) -> Vec<PathBuf> {
        std::env::split_paths(path).collect()
    }
}
