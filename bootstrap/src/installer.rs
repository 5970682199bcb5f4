//! Dependency installation through the runtime's package manager.

use std::ffi::OsString;
use std::path::Path;

use boot_config::BootstrapConfig;
use boot_core::command_stream::describe_command;
use boot_core::error::{BootError, Result};
use boot_core::{boot_error_hint, boot_progress};
use boot_messages::{msg, MESSAGES};
use tracing::{info, warn};

use crate::preflight::RuntimeInfo;
use crate::runner::ProcessRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Installed,
    Skipped,
}

/// `-m pip install -r <manifest> [extra...]`
pub fn install_command_args(manifest: &Path, extra: &[String]) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-m", "pip", "install", "-r"]
        .iter()
        .map(OsString::from)
        .collect();
    args.push(manifest.as_os_str().to_os_string());
    args.extend(extra.iter().map(OsString::from));
    args
}

/// Install the packages listed in the manifest.
///
/// The manifest is checked before anything runs. The command inherits the
/// console and blocks until the package manager exits.
pub fn install_dependencies<R: ProcessRunner + ?Sized>(
    runner: &R,
    runtime: &RuntimeInfo,
    root: &Path,
    config: &BootstrapConfig,
) -> Result<InstallStatus> {
    let manifest = root.join(&config.manifest);
    if !manifest.is_file() {
        return Err(BootError::ManifestMissing(manifest));
    }

    boot_progress!(
        "{}",
        msg!(
            MESSAGES.install.installing,
            manifest = config.manifest.display().to_string()
        )
    );

    // Relative to `root`, the child's working directory.
    let args = install_command_args(&config.manifest, &config.install_args);
    let outcome = runner.run_inherited(&runtime.path, &args, root)?;
    if !outcome.success() {
        warn!(%outcome, "package installation failed");
        boot_error_hint!(
            "{}",
            msg!(
                MESSAGES.install.failed_hint,
                command = describe_command(&runtime.path, &args)
            )
        );
        return Err(BootError::InstallFailed {
            manifest: config.manifest.clone(),
            code: outcome.code(),
        });
    }

    info!(manifest = %manifest.display(), "dependencies installed");
    Ok(InstallStatus::Installed)
}
