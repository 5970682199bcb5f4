//! Cross-platform abstraction layer for the launcher bootstrap.
//!
//! One bootstrap procedure runs everywhere; the differences between
//! operating systems (interpreter names, download pages, PATH
//! syntax) live behind `PlatformProvider`.

pub mod providers;
pub mod registry;
pub mod traits;

pub use registry::PlatformRegistry;
pub use traits::PlatformProvider;

/// Get the current platform provider
pub fn current() -> std::sync::Arc<dyn PlatformProvider> {
    PlatformRegistry::current()
}

/// Convenience functions for common operations
pub mod platform {
    use super::*;
    use anyhow::Result;
    use std::path::PathBuf;

    /// Get the bootstrap's configuration directory
    pub fn user_config_dir() -> Result<PathBuf> {
        current().user_config_dir()
    }
}
