//! Configuration for the launcher bootstrap.
//!
//! Every field has a default, so running without any `bootstrap.yaml`
//! gives the standard launcher layout.

pub mod config;
pub mod loader;
pub mod version;

pub use config::{BootstrapConfig, ConfigOverrides};
pub use loader::{ConfigLoader, LoadedConfig, CONFIG_FILE_NAME};
pub use version::RuntimeVersion;
