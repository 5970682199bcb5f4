//! Windows platform provider implementation.

use crate::providers::CONFIG_DIR_NAME;
use crate::traits::PlatformProvider;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Windows platform provider
pub struct WindowsPlatform;

impl PlatformProvider for WindowsPlatform {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn user_config_dir(&self) -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine user config directory")?
            .join(CONFIG_DIR_NAME))
    }

    // `py` is the launcher installed by the python.org installer.
    fn runtime_candidates(&self) -> Vec<&'static str> {
        vec!["python", "py"]
    }

    fn runtime_download_url(&self) -> &'static str {
        "https://www.python.org/downloads/windows/"
    }
}
