//! Unix platform provider implementation.

use crate::providers::CONFIG_DIR_NAME;
use crate::traits::PlatformProvider;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Unix platform provider (Linux and other Unix-like systems)
pub struct UnixPlatform;

impl PlatformProvider for UnixPlatform {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn user_config_dir(&self) -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine user config directory")?
            .join(CONFIG_DIR_NAME))
    }

    // `python` last: on older systems it can still be Python 2.
    fn runtime_candidates(&self) -> Vec<&'static str> {
        vec!["python3", "python"]
    }

    fn runtime_download_url(&self) -> &'static str {
        "https://www.python.org/downloads/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_python3() {
        let candidates = UnixPlatform.runtime_candidates();
        assert_eq!(candidates.first(), Some(&"python3"));
        assert!(candidates.contains(&"python"));
    }

    #[test]
    fn test_split_path_env() {
        let paths = UnixPlatform.split_path_env("/usr/bin:/usr/local/bin");
        assert_eq!(
            paths,
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/usr/local/bin")]
        );
    }
}
