//! Hands the console to the launcher entry point.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use boot_core::error::EXIT_FAILURE;
use boot_core::{boot_error, boot_progress, boot_success};
use boot_messages::{msg, MESSAGES};
use tracing::{info, warn};

use crate::preflight::RuntimeInfo;
use crate::runner::ProcessRunner;

/// How the entry point ended. Never an error for the bootstrap itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegateOutcome {
    Succeeded,
    /// Non-zero exit; `None` when killed by a signal
    Failed { code: Option<i32> },
    /// The process could not be spawned
    NotStarted { reason: String },
}

impl DelegateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DelegateOutcome::Succeeded)
    }

    /// Status to exit with when propagation is enabled.
    pub fn exit_code(&self) -> i32 {
        match self {
            DelegateOutcome::Succeeded => 0,
            DelegateOutcome::Failed { code: Some(code) } => *code,
            DelegateOutcome::Failed { code: None } | DelegateOutcome::NotStarted { .. } => {
                EXIT_FAILURE
            }
        }
    }
}

impl fmt::Display for DelegateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelegateOutcome::Succeeded => write!(f, "exit code 0"),
            DelegateOutcome::Failed { code: Some(code) } => write!(f, "exit code {}", code),
            DelegateOutcome::Failed { code: None } => write!(f, "terminated by signal"),
            DelegateOutcome::NotStarted { reason } => write!(f, "not started: {}", reason),
        }
    }
}

/// Run `<runtime> <entry_point> [args...]` in `root` and wait for it.
pub fn run_delegate<R: ProcessRunner + ?Sized>(
    runner: &R,
    runtime: &RuntimeInfo,
    root: &Path,
    entry_point: &Path,
    args: &[OsString],
) -> DelegateOutcome {
    boot_progress!(
        "{}",
        msg!(
            MESSAGES.delegate.starting,
            entry_point = entry_point.display().to_string()
        )
    );

    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(entry_point.as_os_str().to_os_string());
    argv.extend(args.iter().cloned());

    let outcome = match runner.run_inherited(&runtime.path, &argv, root) {
        Ok(exit) if exit.success() => DelegateOutcome::Succeeded,
        Ok(exit) => DelegateOutcome::Failed { code: exit.code() },
        Err(e) => DelegateOutcome::NotStarted {
            reason: e.to_string(),
        },
    };

    match &outcome {
        DelegateOutcome::Succeeded => {
            info!("launcher finished");
            boot_success!("{}", msg!(MESSAGES.delegate.finished));
        }
        DelegateOutcome::Failed { .. } => {
            warn!(%outcome, "launcher exited with an error");
            boot_error!(
                "{}",
                msg!(MESSAGES.delegate.failed, outcome = outcome.to_string())
            );
        }
        DelegateOutcome::NotStarted { reason } => {
            warn!(%reason, "launcher could not be started");
            boot_error!(
                "{}",
                msg!(MESSAGES.delegate.not_started, reason = reason.as_str())
            );
        }
    }

    outcome
}
