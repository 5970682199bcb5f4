//! The seam between the bootstrap stages and the operating system.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use boot_core::error::Result;
use boot_core::{CapturedOutput, ExitOutcome};

/// Process operations the stages depend on.
pub trait ProcessRunner {
    /// Resolve a program name on PATH. Names with a path separator are checked as given.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run to completion with output captured (stderr merged into stdout).
    fn capture(&self, program: &Path, args: &[OsString]) -> Result<CapturedOutput>;

    /// Run in `cwd` with the console inherited, blocking until the child exits.
    fn run_inherited(&self, program: &Path, args: &[OsString], cwd: &Path) -> Result<ExitOutcome>;
}

/// Runs real processes through `boot-core`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        boot_core::locate_tool(program)
    }

    fn capture(&self, program: &Path, args: &[OsString]) -> Result<CapturedOutput> {
        boot_core::capture_command(program, args)
    }

    fn run_inherited(&self, program: &Path, args: &[OsString], cwd: &Path) -> Result<ExitOutcome> {
        boot_core::run_inherited(program, args, cwd)
    }
}
