//! `--check`: report what a run would need without running anything.

use std::path::{Path, PathBuf};

use boot_config::BootstrapConfig;
use boot_core::boot_println;
use boot_core::error::EXIT_FAILURE;
use boot_core::file_system::has_file;
use boot_messages::{msg, MESSAGES};
use boot_platform::PlatformProvider;
use colored::Colorize;

use crate::preflight::{check_runtime, RuntimeInfo};
use crate::runner::ProcessRunner;
use crate::workspace;

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub root: PathBuf,
    /// The detected runtime, or the rendered detection error
    pub runtime: std::result::Result<RuntimeInfo, String>,
    pub directories: Vec<PathBuf>,
    /// Subset of `directories` a run would create
    pub missing_directories: Vec<PathBuf>,
    pub manifest: PathBuf,
    pub manifest_present: bool,
    pub entry_point: PathBuf,
    pub entry_point_present: bool,
}

impl CheckReport {
    /// Problems that would stop a real run. Missing directories are not
    /// counted since a run creates them.
    pub fn blocking_issues(&self) -> usize {
        [
            self.runtime.is_err(),
            !self.manifest_present,
            !self.entry_point_present,
        ]
        .iter()
        .filter(|issue| **issue)
        .count()
    }

    pub fn exit_code(&self) -> i32 {
        if self.blocking_issues() == 0 {
            0
        } else {
            EXIT_FAILURE
        }
    }

    pub fn print(&self) {
        let ok = "✓".green();
        let bad = "✗".red();
        let pending = "•".yellow();

        boot_println!(
            "{}",
            msg!(MESSAGES.check.header, root = self.root.display().to_string())
        );

        match &self.runtime {
            Ok(runtime) => boot_println!(
                "  {} {}",
                ok,
                msg!(
                    MESSAGES.check.runtime_present,
                    version = runtime.version_label(),
                    path = runtime.path.display().to_string()
                )
            ),
            Err(error) => boot_println!(
                "  {} {}",
                bad,
                msg!(MESSAGES.check.runtime_missing, error = error.as_str())
            ),
        }

        for dir in &self.directories {
            let path = dir.display().to_string();
            if self.missing_directories.contains(dir) {
                boot_println!(
                    "  {} {}",
                    pending,
                    msg!(MESSAGES.check.directory_missing, path = path)
                );
            } else {
                boot_println!(
                    "  {} {}",
                    ok,
                    msg!(MESSAGES.check.directory_present, path = path)
                );
            }
        }

        let manifest = self.manifest.display().to_string();
        if self.manifest_present {
            boot_println!("  {} {}", ok, msg!(MESSAGES.check.manifest_present, path = manifest));
        } else {
            boot_println!("  {} {}", bad, msg!(MESSAGES.check.manifest_missing, path = manifest));
        }

        let entry_point = self.entry_point.display().to_string();
        if self.entry_point_present {
            boot_println!(
                "  {} {}",
                ok,
                msg!(MESSAGES.check.entry_point_present, path = entry_point)
            );
        } else {
            boot_println!(
                "  {} {}",
                bad,
                msg!(MESSAGES.check.entry_point_missing, path = entry_point)
            );
        }

        match self.blocking_issues() {
            0 => boot_println!("{}", msg!(MESSAGES.check.all_ok)),
            count => boot_println!(
                "{}",
                msg!(MESSAGES.check.issues_found, count = count.to_string())
            ),
        }
    }
}

/// Probe the runtime and inspect the workspace. Creates and installs nothing.
pub fn run_check<R: ProcessRunner + ?Sized>(
    runner: &R,
    platform: &dyn PlatformProvider,
    root: &Path,
    config: &BootstrapConfig,
) -> CheckReport {
    let runtime = check_runtime(runner, platform, config).map_err(|e| e.to_string());

    CheckReport {
        root: root.to_path_buf(),
        runtime,
        directories: config.directories.clone(),
        missing_directories: workspace::inspect(root, &config.directories),
        manifest: config.manifest.clone(),
        manifest_present: has_file(root, &config.manifest),
        entry_point: config.entry_point.clone(),
        entry_point_present: has_file(root, &config.entry_point),
    }
}
