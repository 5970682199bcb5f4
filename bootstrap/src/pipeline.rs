//! The bootstrap state machine.
//!
//! ```text
//! Start -> RuntimeChecked -> WorkspaceReady -> DepsInstalled -> DelegateRunning -> Done
//!   \____________\_______________\______________________________________________-> Aborted
//! ```
//!
//! Only the first three stages can abort. Whatever the delegate does, the
//! run reaches `Done`.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use boot_config::BootstrapConfig;
use boot_core::error::Result;
use boot_core::platform::get_platform_info;
use boot_core::{boot_info, boot_println, boot_progress, boot_success};
use boot_messages::{msg, MESSAGES};
use boot_platform::PlatformProvider;
use tracing::{debug, info};

use crate::check::{run_check, CheckReport};
use crate::delegate::{run_delegate, DelegateOutcome};
use crate::installer::{install_dependencies, InstallStatus};
use crate::preflight::{check_runtime, RuntimeInfo};
use crate::runner::ProcessRunner;
use crate::workspace::{self, WorkspaceReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    RuntimeChecked,
    WorkspaceReady,
    DepsInstalled,
    DelegateRunning,
    Done,
    Aborted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::RuntimeChecked => "runtime-checked",
            Stage::WorkspaceReady => "workspace-ready",
            Stage::DepsInstalled => "deps-installed",
            Stage::DelegateRunning => "delegate-running",
            Stage::Done => "done",
            Stage::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Switches that come from the command line only.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    pub skip_install: bool,
    /// Appended to the entry point's command line
    pub delegate_args: Vec<OsString>,
}

/// Everything a completed run found out.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub runtime: RuntimeInfo,
    pub workspace: WorkspaceReport,
    pub install: InstallStatus,
    pub delegate: DelegateOutcome,
    pub propagate_exit_code: bool,
}

impl BootstrapReport {
    /// 0 unless propagation is on and the delegate failed.
    pub fn exit_code(&self) -> i32 {
        if self.propagate_exit_code {
            self.delegate.exit_code()
        } else {
            0
        }
    }
}

pub struct Bootstrap<R: ProcessRunner> {
    config: BootstrapConfig,
    root: PathBuf,
    runner: R,
    platform: Arc<dyn PlatformProvider>,
    options: BootstrapOptions,
    stage: Stage,
}

impl<R: ProcessRunner> Bootstrap<R> {
    pub fn new(config: BootstrapConfig, root: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            config,
            root: root.into(),
            runner,
            platform: boot_platform::current(),
            options: BootstrapOptions::default(),
            stage: Stage::Start,
        }
    }

    pub fn with_platform(mut self, platform: Arc<dyn PlatformProvider>) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_options(mut self, options: BootstrapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Run every stage in order. On error the stage is left at `Aborted`.
    pub fn run(&mut self) -> Result<BootstrapReport> {
        debug!(
            platform = %get_platform_info(),
            provider = self.platform.name(),
            root = %self.root.display(),
            "starting bootstrap"
        );
        match self.run_stages() {
            Ok(report) => Ok(report),
            Err(e) => {
                self.advance(Stage::Aborted);
                Err(e)
            }
        }
    }

    fn run_stages(&mut self) -> Result<BootstrapReport> {
        boot_println!(
            "{}",
            msg!(MESSAGES.common.banner, root = self.root.display().to_string())
        );

        boot_progress!("{}", msg!(MESSAGES.preflight.checking));
        let runtime = check_runtime(&self.runner, self.platform.as_ref(), &self.config)?;
        boot_success!(
            "{}",
            msg!(
                MESSAGES.preflight.found,
                version = runtime.version_label(),
                path = runtime.path.display().to_string()
            )
        );
        self.advance(Stage::RuntimeChecked);

        boot_progress!("{}", msg!(MESSAGES.workspace.preparing));
        let workspace = workspace::initialize(&self.root, &self.config.directories)?;
        boot_success!(
            "{}",
            msg!(
                MESSAGES.workspace.ready,
                created = workspace.created.len().to_string(),
                existing = workspace.existing.len().to_string()
            )
        );
        self.advance(Stage::WorkspaceReady);

        let install = if self.options.skip_install {
            boot_info!("{}", msg!(MESSAGES.install.skipped));
            InstallStatus::Skipped
        } else {
            let status = install_dependencies(&self.runner, &runtime, &self.root, &self.config)?;
            boot_success!("{}", msg!(MESSAGES.install.success));
            status
        };
        self.advance(Stage::DepsInstalled);

        self.advance(Stage::DelegateRunning);
        let delegate = run_delegate(
            &self.runner,
            &runtime,
            &self.root,
            &self.config.entry_point,
            &self.options.delegate_args,
        );
        boot_println!("{}", msg!(MESSAGES.common.thank_you));
        self.advance(Stage::Done);

        info!(?install, %delegate, "bootstrap finished");
        Ok(BootstrapReport {
            runtime,
            workspace,
            install,
            delegate,
            propagate_exit_code: self.config.propagate_exit_code,
        })
    }

    /// Diagnose the workspace without changing anything.
    pub fn check(&self) -> CheckReport {
        run_check(&self.runner, self.platform.as_ref(), &self.root, &self.config)
    }

    fn advance(&mut self, next: Stage) {
        debug!(from = %self.stage, to = %next, "stage transition");
        self.stage = next;
    }
}
