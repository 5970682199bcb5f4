//! macOS platform provider implementation.

use crate::providers::CONFIG_DIR_NAME;
use crate::traits::PlatformProvider;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// macOS platform provider
pub struct MacOSPlatform;

impl PlatformProvider for MacOSPlatform {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn user_config_dir(&self) -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine user config directory")?
            .join(CONFIG_DIR_NAME))
    }

    fn runtime_candidates(&self) -> Vec<&'static str> {
        vec!["python3", "python"]
    }

    fn runtime_download_url(&self) -> &'static str {
        "https://www.python.org/downloads/macos/"
    }
}
