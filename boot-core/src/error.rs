use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for every fatal bootstrap condition.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Error, Debug)]
pub enum BootError {
    Config(String),
    Io(#[from] std::io::Error),
    Command(String),
    Serialization(String),
    RuntimeMissing {
        candidates: Vec<String>,
        download_url: String,
    },
    RuntimeTooOld {
        runtime: String,
        found: String,
        required: String,
    },
    ManifestMissing(PathBuf),
    InstallFailed {
        manifest: PathBuf,
        code: Option<i32>,
    },
    Workspace {
        path: PathBuf,
        source: std::io::Error,
    },
    Other(#[from] anyhow::Error),
}

impl Display for BootError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BootError::Config(s) => write!(f, "Configuration error: {}", s),
            BootError::Io(e) => write!(f, "I/O error: {}", e),
            BootError::Command(s) => write!(f, "Command failed: {}", s),
            BootError::Serialization(s) => write!(f, "Serialization error: {}", s),
            BootError::RuntimeMissing {
                candidates,
                download_url,
            } => {
                write!(f, "Python is not installed or not in your PATH\n\n")?;
                writeln!(f, "Looked for: {}", candidates.join(", "))?;
                writeln!(f, "Fix:")?;
                writeln!(f, "  • Install Python 3 from {}", download_url)?;
                write!(f, "  • Make sure it is added to PATH, then run this again")
            }
            BootError::RuntimeTooOld {
                runtime,
                found,
                required,
            } => {
                write!(
                    f,
                    "{} reports version {}, but {} or newer is required\n\n",
                    runtime, found, required
                )?;
                write!(f, "Fix:\n  • Install a newer Python and put it first in PATH")
            }
            BootError::ManifestMissing(path) => {
                write!(f, "Dependency manifest not found: {}", path.display())
            }
            BootError::InstallFailed { manifest, code } => match code {
                Some(code) => write!(
                    f,
                    "Failed to install dependencies from {} (exit code {})",
                    manifest.display(),
                    code
                ),
                None => write!(
                    f,
                    "Failed to install dependencies from {} (terminated by signal)",
                    manifest.display()
                ),
            },
            BootError::Workspace { path, source } => {
                write!(f, "Failed to create directory {}: {}", path.display(), source)
            }
            BootError::Other(e) => write!(f, "{:#}", e),
        }
    }
}

impl BootError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

impl From<serde_yaml_ng::Error> for BootError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        BootError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BootError>;
