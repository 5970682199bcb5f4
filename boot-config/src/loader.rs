// Standard library imports
use std::fs;
use std::path::{Path, PathBuf};

// External crate imports
use anyhow::Context;
use boot_core::error::{BootError, Result};
use tracing::debug;

// Internal imports
use crate::config::BootstrapConfig;

/// File name looked up in the workspace root and the user config directory.
pub const CONFIG_FILE_NAME: &str = "bootstrap.yaml";

/// A configuration together with the file it came from (`None` for defaults).
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: BootstrapConfig,
    pub source: Option<PathBuf>,
}

/// Finds and loads `bootstrap.yaml`.
///
/// Priority:
/// 1. **Explicit path:** given with `--config`; it must exist.
/// 2. **Workspace root:** `<root>/bootstrap.yaml`.
/// 3. **User config directory:** e.g. `~/.config/launcher-bootstrap/bootstrap.yaml`.
/// 4. **Defaults.**
pub struct ConfigLoader {
    root: PathBuf,
    user_config_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            user_config_dir: boot_platform::platform::user_config_dir().ok(),
        }
    }

    /// Replace the user-level search directory (`None` disables it).
    pub fn with_user_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_config_dir = dir;
        self
    }

    pub fn load(&self, explicit: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(BootError::Config(format!(
                    "Configuration file {} does not exist",
                    path.display()
                )));
            }
            return self.load_source(path);
        }

        let local = self.root.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return self.load_source(&local);
        }

        if let Some(user_dir) = &self.user_config_dir {
            let user = user_dir.join(CONFIG_FILE_NAME);
            if user.is_file() {
                return self.load_source(&user);
            }
        }

        debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(LoadedConfig {
            config: BootstrapConfig::default(),
            source: None,
        })
    }

    fn load_source(&self, path: &Path) -> Result<LoadedConfig> {
        debug!("Loading config from: {}", path.display());
        let config = load_from_path(path)?;
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

/// Load a configuration file, filling absent fields with defaults.
pub fn load_from_path(path: &Path) -> Result<BootstrapConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(BootstrapConfig::default());
    }
    serde_yaml_ng::from_str(&contents)
        .map_err(|e| BootError::Config(format!("Invalid {}: {}", path.display(), e)))
}

/// Write a configuration file, creating its parent directory.
pub fn save_to_path(config: &BootstrapConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let yaml = serde_yaml_ng::to_string(config)?;
    fs::write(path, yaml)?;

    Ok(())
}
