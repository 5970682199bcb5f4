//! In-memory `ProcessRunner` for stage and pipeline tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use boot_core::error::{BootError, Result};
use boot_core::{CapturedOutput, ExitOutcome};
use boot_platform::PlatformProvider;

use crate::runner::ProcessRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Locate(String),
    Capture(Vec<String>),
    Run { argv: Vec<String>, cwd: PathBuf },
}

pub struct FakeRunner {
    runtimes: HashMap<String, (PathBuf, CapturedOutput)>,
    install_outcome: ExitOutcome,
    delegate_outcome: Option<ExitOutcome>,
    calls: RefCell<Vec<Call>>,
}

impl FakeRunner {
    /// No runtime on PATH; install and delegate would both succeed.
    pub fn new() -> Self {
        Self {
            runtimes: HashMap::new(),
            install_outcome: ExitOutcome::from_code(0),
            delegate_outcome: Some(ExitOutcome::from_code(0)),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_runtime(self, name: &str, version_output: &str) -> Self {
        self.with_runtime_outcome(name, ExitOutcome::from_code(0), version_output)
    }

    pub fn with_runtime_outcome(mut self, name: &str, outcome: ExitOutcome, output: &str) -> Self {
        let path = PathBuf::from("/fake/bin").join(name);
        self.runtimes.insert(
            name.to_string(),
            (
                path,
                CapturedOutput {
                    outcome,
                    output: output.to_string(),
                },
            ),
        );
        self
    }

    pub fn install_exits(mut self, code: i32) -> Self {
        self.install_outcome = ExitOutcome::from_code(code);
        self
    }

    pub fn delegate_exits(mut self, outcome: ExitOutcome) -> Self {
        self.delegate_outcome = Some(outcome);
        self
    }

    pub fn delegate_fails_to_start(mut self) -> Self {
        self.delegate_outcome = None;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn runs(&self) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Run { argv, .. } => Some(argv.clone()),
                _ => None,
            })
            .collect()
    }

    /// Package-manager invocations (`<runtime> -m pip ...`).
    pub fn install_runs(&self) -> Vec<Vec<String>> {
        self.runs()
            .into_iter()
            .filter(|argv| is_install(&argv[1..]))
            .collect()
    }

    /// Entry-point invocations.
    pub fn delegate_runs(&self) -> Vec<Vec<String>> {
        self.runs()
            .into_iter()
            .filter(|argv| !is_install(&argv[1..]))
            .collect()
    }
}

fn is_install(args: &[String]) -> bool {
    args.first().map(String::as_str) == Some("-m")
}

fn argv(program: &Path, args: &[OsString]) -> Vec<String> {
    let mut argv = vec![program.to_string_lossy().into_owned()];
    argv.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
    argv
}

impl ProcessRunner for FakeRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.calls
            .borrow_mut()
            .push(Call::Locate(program.to_string()));
        self.runtimes.get(program).map(|(path, _)| path.clone())
    }

    fn capture(&self, program: &Path, args: &[OsString]) -> Result<CapturedOutput> {
        self.calls.borrow_mut().push(Call::Capture(argv(program, args)));
        self.runtimes
            .values()
            .find(|(path, _)| path == program)
            .map(|(_, output)| output.clone())
            .ok_or_else(|| BootError::Command(format!("{} not found", program.display())))
    }

    fn run_inherited(&self, program: &Path, args: &[OsString], cwd: &Path) -> Result<ExitOutcome> {
        let argv = argv(program, args);
        let install = is_install(&argv[1..]);
        self.calls.borrow_mut().push(Call::Run {
            argv,
            cwd: cwd.to_path_buf(),
        });

        if install {
            return Ok(self.install_outcome);
        }
        self.delegate_outcome
            .ok_or_else(|| BootError::Command(format!("Failed to start '{}'", program.display())))
    }
}

/// Unix-like candidates without touching the real environment.
pub struct TestPlatform;

impl PlatformProvider for TestPlatform {
    fn name(&self) -> &'static str {
        "test"
    }

    fn user_config_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(PathBuf::from("/nonexistent"))
    }

    fn runtime_candidates(&self) -> Vec<&'static str> {
        vec!["python3", "python"]
    }

    fn runtime_download_url(&self) -> &'static str {
        "https://www.python.org/downloads/"
    }
}
