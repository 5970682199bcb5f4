//! Platform registry for detecting and providing platform implementations.

use crate::traits::PlatformProvider;
use std::sync::Arc;

#[cfg(target_os = "macos")]
use crate::providers::MacOSPlatform;

#[cfg(windows)]
use crate::providers::WindowsPlatform;

#[cfg(all(unix, not(target_os = "macos")))]
use crate::providers::UnixPlatform;

/// Platform registry for detecting the current platform and creating providers.
pub struct PlatformRegistry;

impl PlatformRegistry {
    /// Get the platform provider for the current operating system.
    pub fn current() -> Arc<dyn PlatformProvider> {
        #[cfg(target_os = "macos")]
        return Arc::new(MacOSPlatform);

        #[cfg(windows)]
        return Arc::new(WindowsPlatform);

        #[cfg(all(unix, not(target_os = "macos")))]
        return Arc::new(UnixPlatform);

        #[cfg(not(any(unix, windows)))]
        compile_error!("Unsupported platform - only Unix-like and Windows platforms are supported");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_basic_operations() {
        let platform = PlatformRegistry::current();

        assert!(!platform.runtime_candidates().is_empty());
        assert!(platform.runtime_download_url().starts_with("https://"));
        assert!(platform.user_config_dir().is_ok());
    }
}
