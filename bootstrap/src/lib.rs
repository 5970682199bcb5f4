//! Launcher bootstrap library.
//!
//! Runs the setup sequence that has to happen before the launcher script
//! can start: find a Python runtime, scaffold the `sources/` tree,
//! install the declared packages, then hand the console to the launcher.

pub mod check;
pub mod delegate;
pub mod installer;
pub mod pipeline;
pub mod preflight;
pub mod runner;
pub mod workspace;

#[cfg(test)]
mod test_support;

pub use check::CheckReport;
pub use delegate::DelegateOutcome;
pub use installer::InstallStatus;
pub use pipeline::{Bootstrap, BootstrapOptions, BootstrapReport, Stage};
pub use preflight::RuntimeInfo;
pub use runner::{ProcessRunner, SystemRunner};
pub use workspace::WorkspaceReport;
