use std::ffi::OsString;
use std::path::PathBuf;

use boot_config::ConfigOverrides;
use clap::Parser;

/// Prepare the launcher workspace, install its dependencies and start it.
///
/// With no arguments the bootstrap runs in the current directory using
/// `bootstrap.yaml` if present, otherwise the built-in defaults.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Workspace root (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Configuration file to use instead of the usual lookup
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Python interpreter to use instead of probing PATH
    #[arg(long, value_name = "PROGRAM", env = "BOOTSTRAP_RUNTIME")]
    pub runtime: Option<String>,

    /// Dependency manifest, relative to the root
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Launcher script, relative to the root
    #[arg(long, value_name = "FILE")]
    pub entry_point: Option<PathBuf>,

    /// Do not run the package manager
    #[arg(long)]
    pub skip_install: bool,

    /// Exit with the launcher's status when it fails
    #[arg(long)]
    pub propagate_exit_code: bool,

    /// Report what is missing without changing anything
    #[arg(long, conflicts_with = "write_config")]
    pub check: bool,

    /// Write a default bootstrap.yaml into the root and exit
    #[arg(long)]
    pub write_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Arguments passed through to the launcher
    #[arg(last = true, value_name = "ARGS")]
    pub delegate_args: Vec<OsString>,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            runtime: self.runtime.clone(),
            manifest: self.manifest.clone(),
            entry_point: self.entry_point.clone(),
            propagate_exit_code: self.propagate_exit_code.then_some(true),
        }
    }
}
