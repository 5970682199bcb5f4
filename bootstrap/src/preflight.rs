//! Runtime detection.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

use boot_config::{BootstrapConfig, RuntimeVersion};
use boot_core::boot_warning;
use boot_core::error::{BootError, Result};
use boot_messages::{msg, MESSAGES};
use boot_platform::PlatformProvider;
use regex::Regex;
use tracing::{debug, info};

use crate::runner::ProcessRunner;

/// The interpreter every later stage runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// Name as configured or probed, e.g. `python3`
    pub program: String,
    /// Resolved executable
    pub path: PathBuf,
    /// `None` when the `--version` output could not be parsed
    pub version: Option<RuntimeVersion>,
    /// Raw `--version` output
    pub raw_version: String,
}

impl RuntimeInfo {
    pub fn version_label(&self) -> String {
        match &self.version {
            Some(version) => version.to_string(),
            None => "(unknown version)".to_string(),
        }
    }
}

fn version_regex() -> Option<&'static Regex> {
    static VERSION_RE: OnceLock<Option<Regex>> = OnceLock::new();
    VERSION_RE
        .get_or_init(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").ok())
        .as_ref()
}

/// Extract the first `X.Y[.Z]` from `--version` output such as `Python 3.11.4`.
pub fn parse_version_output(output: &str) -> Option<RuntimeVersion> {
    let caps = version_regex()?.captures(output)?;
    let part = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    Some(RuntimeVersion::new(part(1)?, part(2)?, part(3).unwrap_or(0)))
}

/// Names probed, in order: the configured runtime, or the platform defaults.
pub fn runtime_candidates(config: &BootstrapConfig, platform: &dyn PlatformProvider) -> Vec<String> {
    match &config.runtime {
        Some(runtime) => vec![runtime.clone()],
        None => platform
            .runtime_candidates()
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

/// Find a usable runtime.
///
/// A candidate is usable when it is on PATH and `--version` exits zero.
/// Candidates older than `min_runtime_version` are skipped; if nothing else
/// qualifies the version error is returned instead of `RuntimeMissing`.
pub fn check_runtime<R: ProcessRunner + ?Sized>(
    runner: &R,
    platform: &dyn PlatformProvider,
    config: &BootstrapConfig,
) -> Result<RuntimeInfo> {
    let candidates = runtime_candidates(config, platform);
    let mut too_old: Option<BootError> = None;

    for program in &candidates {
        let Some(path) = runner.locate(program) else {
            debug!(runtime = %program, "not found on PATH");
            continue;
        };

        let probe = match runner.capture(&path, &[OsString::from("--version")]) {
            Ok(probe) => probe,
            Err(e) => {
                debug!(runtime = %program, error = %e, "version probe failed to start");
                continue;
            }
        };
        if !probe.outcome.success() {
            boot_warning!(
                "{}",
                msg!(
                    MESSAGES.preflight.candidate_unusable,
                    runtime = program.as_str(),
                    outcome = probe.outcome.to_string()
                )
            );
            continue;
        }

        let version = parse_version_output(&probe.output);
        match (version, config.min_runtime_version) {
            (None, _) => {
                boot_warning!(
                    "{}",
                    msg!(
                        MESSAGES.preflight.found_unknown_version,
                        path = path.display().to_string(),
                        output = probe.output.as_str()
                    )
                );
            }
            (Some(found), Some(required)) if found < required => {
                debug!(runtime = %program, %found, %required, "runtime too old");
                too_old.get_or_insert(BootError::RuntimeTooOld {
                    runtime: program.clone(),
                    found: found.to_string(),
                    required: required.to_string(),
                });
                continue;
            }
            _ => {}
        }

        info!(runtime = %program, path = %path.display(), version = ?version, "runtime found");
        return Ok(RuntimeInfo {
            program: program.clone(),
            path,
            version,
            raw_version: probe.output,
        });
    }

    if let Some(err) = too_old {
        return Err(err);
    }

    let searched = platform.split_path_env(&env::var("PATH").unwrap_or_default());
    debug!(?candidates, searched = ?searched, "no usable runtime");
    Err(BootError::RuntimeMissing {
        candidates,
        download_url: platform.runtime_download_url().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, FakeRunner, TestPlatform};
    use boot_core::ExitOutcome;

    #[test]
    fn test_parse_version_output() {
        assert_eq!(
            parse_version_output("Python 3.11.4"),
            Some(RuntimeVersion::new(3, 11, 4))
        );
        assert_eq!(
            parse_version_output("Python 3.12"),
            Some(RuntimeVersion::new(3, 12, 0))
        );
        assert_eq!(
            parse_version_output("Python 3.13.0rc1"),
            Some(RuntimeVersion::new(3, 13, 0))
        );
        assert_eq!(parse_version_output("command not found"), None);
    }

    #[test]
    fn test_first_working_candidate_wins() {
        let runner = FakeRunner::new()
            .with_runtime("python3", "Python 3.10.12")
            .with_runtime("python", "Python 3.12.0");

        let info = check_runtime(&runner, &TestPlatform, &BootstrapConfig::default()).unwrap();

        assert_eq!(info.program, "python3");
        assert_eq!(info.version, Some(RuntimeVersion::new(3, 10, 12)));
        assert_eq!(info.version_label(), "3.10.12");
    }

    #[test]
    fn test_falls_back_when_probe_fails() {
        let runner = FakeRunner::new()
            .with_runtime_outcome("python3", ExitOutcome::from_code(9009), "")
            .with_runtime("python", "Python 3.9.2");

        let info = check_runtime(&runner, &TestPlatform, &BootstrapConfig::default()).unwrap();
        assert_eq!(info.program, "python");
    }

    #[test]
    fn test_missing_runtime_names_candidates_and_url() {
        let runner = FakeRunner::new();

        let err = check_runtime(&runner, &TestPlatform, &BootstrapConfig::default()).unwrap_err();
        match err {
            BootError::RuntimeMissing {
                candidates,
                download_url,
            } => {
                assert_eq!(candidates, vec!["python3", "python"]);
                assert_eq!(download_url, "https://www.python.org/downloads/");
            }
            other => panic!("expected RuntimeMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_configured_runtime_replaces_candidates() {
        let runner = FakeRunner::new()
            .with_runtime("python3", "Python 3.11.0")
            .with_runtime("pypy3", "Python 3.10.13 (PyPy 7.3.15)");
        let config = BootstrapConfig {
            runtime: Some("pypy3".to_string()),
            ..Default::default()
        };

        let info = check_runtime(&runner, &TestPlatform, &config).unwrap();

        assert_eq!(info.program, "pypy3");
        assert_eq!(runner.calls().first(), Some(&Call::Locate("pypy3".to_string())));
        assert!(!runner.calls().contains(&Call::Locate("python3".to_string())));
    }

    #[test]
    fn test_old_runtime_is_rejected() {
        let runner = FakeRunner::new().with_runtime("python", "Python 2.7.18");
        let config = BootstrapConfig {
            runtime: Some("python".to_string()),
            ..Default::default()
        };

        let err = check_runtime(&runner, &TestPlatform, &config).unwrap_err();
        assert!(matches!(err, BootError::RuntimeTooOld { .. }));
    }

    #[test]
    fn test_newer_candidate_preferred_over_old_one() {
        let runner = FakeRunner::new()
            .with_runtime("python3", "Python 3.4.10")
            .with_runtime("python", "Python 3.11.2");

        let info = check_runtime(&runner, &TestPlatform, &BootstrapConfig::default()).unwrap();
        assert_eq!(info.program, "python");
    }

    #[test]
    fn test_unparsable_version_is_accepted() {
        let runner = FakeRunner::new().with_runtime("python3", "some custom build");

        let info = check_runtime(&runner, &TestPlatform, &BootstrapConfig::default()).unwrap();
        assert_eq!(info.version, None);
        assert_eq!(info.raw_version, "some custom build");
    }

    #[test]
    fn test_version_check_can_be_disabled() {
        let runner = FakeRunner::new().with_runtime("python3", "Python 2.7.18");
        let config = BootstrapConfig {
            min_runtime_version: None,
            ..Default::default()
        };

        assert!(check_runtime(&runner, &TestPlatform, &config).is_ok());
    }
}
