use std::path::{Component, Path, PathBuf};

use boot_core::error::{BootError, Result};
use serde::{Deserialize, Serialize};

use crate::version::RuntimeVersion;

/// Settings for one bootstrap run.
///
/// Stored as `bootstrap.yaml`. Paths are relative to the workspace root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Interpreter to use instead of probing the platform candidates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    /// Oldest accepted interpreter version; `null` accepts any version
    pub min_runtime_version: Option<RuntimeVersion>,

    /// Package manifest handed to `pip install -r`
    pub manifest: PathBuf,

    /// Script run by the interpreter once setup is complete
    pub entry_point: PathBuf,

    /// Directories guaranteed to exist before the entry point starts
    pub directories: Vec<PathBuf>,

    /// Extra arguments appended to the install command
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub install_args: Vec<String>,

    /// Exit with the entry point's status when it fails
    pub propagate_exit_code: bool,
}

pub fn default_min_runtime_version() -> RuntimeVersion {
    RuntimeVersion::new(3, 6, 0)
}

pub fn default_manifest() -> PathBuf {
    PathBuf::from("requirements.txt")
}

pub fn default_entry_point() -> PathBuf {
    PathBuf::from("launcher.py")
}

pub fn default_directories() -> Vec<PathBuf> {
    let sources = Path::new("sources");
    vec![
        sources.to_path_buf(),
        sources.join("versions"),
        sources.join("assets"),
        sources.join("libraries"),
    ]
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            runtime: None,
            min_runtime_version: Some(default_min_runtime_version()),
            manifest: default_manifest(),
            entry_point: default_entry_point(),
            directories: default_directories(),
            install_args: Vec::new(),
            propagate_exit_code: false,
        }
    }
}

/// Values given on the command line or through the environment.
///
/// `None` keeps whatever the file (or the default) says.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub runtime: Option<String>,
    pub manifest: Option<PathBuf>,
    pub entry_point: Option<PathBuf>,
    pub propagate_exit_code: Option<bool>,
}

impl BootstrapConfig {
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(runtime) = overrides.runtime {
            self.runtime = Some(runtime);
        }
        if let Some(manifest) = overrides.manifest {
            self.manifest = manifest;
        }
        if let Some(entry_point) = overrides.entry_point {
            self.entry_point = entry_point;
        }
        if let Some(propagate) = overrides.propagate_exit_code {
            self.propagate_exit_code = propagate;
        }
    }

    /// Reject settings that would let the bootstrap touch paths outside its root.
    pub fn validate(&self) -> Result<()> {
        if self.directories.is_empty() {
            return Err(BootError::Config(
                "'directories' must list at least one directory".to_string(),
            ));
        }
        for dir in &self.directories {
            check_relative("directories", dir)?;
        }
        check_relative("manifest", &self.manifest)?;
        check_relative("entry_point", &self.entry_point)?;

        if let Some(runtime) = &self.runtime {
            if runtime.trim().is_empty() {
                return Err(BootError::Config("'runtime' must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

fn check_relative(field: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(BootError::Config(format!("'{}' must not be empty", field)));
    }
    let escapes = path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes || path.is_absolute() {
        return Err(BootError::Config(format!(
            "'{}' entry {} must be a relative path inside the workspace",
            field,
            path.display()
        )));
    }
    Ok(())
}
