// Standard library
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

// External crates
use crate::error::{BootError, Result};
use duct::cmd;
use tracing::debug;
use which::which;

/// How a child process finished.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    code: Option<i32>,
}

impl ExitOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }

    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signalled() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Output of a command run with stdout captured and stderr merged into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub outcome: ExitOutcome,
    pub output: String,
}

fn to_os_args<A: AsRef<OsStr>>(args: &[A]) -> Vec<OsString> {
    args.iter().map(|a| a.as_ref().to_os_string()).collect()
}

/// Render a command line for messages and logs.
pub fn describe_command<A: AsRef<OsStr>>(program: &Path, args: &[A]) -> String {
    let mut parts = vec![program.to_string_lossy().into_owned()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run a command to completion with stderr merged into captured stdout.
///
/// A non-zero exit is not an error here; callers inspect `outcome`.
pub fn capture_command<A: AsRef<OsStr>>(program: &Path, args: &[A]) -> Result<CapturedOutput> {
    let full_command = describe_command(program, args);
    debug!(command = %full_command, "capturing command output");

    let output = cmd(program, to_os_args(args))
        .stderr_to_stdout()
        .stdout_capture()
        .unchecked()
        .run()
        .map_err(|e| BootError::Command(format!("Failed to start '{}': {}", full_command, e)))?;

    Ok(CapturedOutput {
        outcome: ExitOutcome::from_status(output.status),
        output: String::from_utf8_lossy(&output.stdout).trim().to_string(),
    })
}

/// Run a command in `cwd` with the console inherited and block until it exits.
///
/// There is no timeout: a hung child blocks the caller until it is killed.
pub fn run_inherited<A: AsRef<OsStr>>(program: &Path, args: &[A], cwd: &Path) -> Result<ExitOutcome> {
    let full_command = describe_command(program, args);
    debug!(command = %full_command, cwd = %cwd.display(), "running command");

    let output = cmd(program, to_os_args(args))
        .dir(cwd)
        .unchecked()
        .run()
        .map_err(|e| BootError::Command(format!("Failed to start '{}': {}", full_command, e)))?;

    let outcome = ExitOutcome::from_status(output.status);
    debug!(command = %full_command, %outcome, "command finished");
    Ok(outcome)
}

/// Resolve a tool on PATH. Names containing a path separator are checked directly.
pub fn locate_tool(tool_name: &str) -> Option<PathBuf> {
    which(tool_name).ok()
}
