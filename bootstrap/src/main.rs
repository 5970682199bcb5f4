use std::env;
use std::path::Path;
use std::process;

use boot_config::loader::save_to_path;
use boot_config::{BootstrapConfig, ConfigLoader, CONFIG_FILE_NAME};
use boot_core::error::{BootError, Result, EXIT_FAILURE};
use boot_core::{boot_error, boot_error_hint, boot_info, boot_success, boot_warning};
use boot_messages::{msg, MESSAGES};
use bootstrap::{Bootstrap, BootstrapOptions, SystemRunner};
use clap::Parser;
use tracing::debug;

mod cli;

use cli::Args;

fn main() {
    let args = Args::parse();
    let log_guard = boot_logging::init_subscriber(if args.debug { "debug" } else { "warn" });
    let debug_enabled = args.debug;

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            debug!(error = ?e, "bootstrap failed");
            report_error(&e, debug_enabled);
            e.exit_code()
        }
    };

    // process::exit skips destructors; flush file logs first.
    drop(log_guard);
    process::exit(code);
}

fn run(args: Args) -> Result<i32> {
    let root = match &args.root {
        Some(root) => std::path::absolute(root)?,
        None => env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(BootError::Config(format!(
            "Workspace root {} is not a directory",
            root.display()
        )));
    }

    if args.write_config {
        return write_default_config(&root);
    }

    let loaded = ConfigLoader::new(&root).load(args.config.as_deref())?;
    if let Some(source) = &loaded.source {
        boot_info!(
            "{}",
            msg!(MESSAGES.common.config_loaded, path = source.display().to_string())
        );
    }
    let mut config = loaded.config;
    config.apply_overrides(args.overrides());
    config.validate()?;
    debug!(?config, "effective configuration");

    let options = BootstrapOptions {
        skip_install: args.skip_install,
        delegate_args: args.delegate_args,
    };
    let mut bootstrap = Bootstrap::new(config, &root, SystemRunner).with_options(options);

    if args.check {
        let report = bootstrap.check();
        report.print();
        return Ok(report.exit_code());
    }

    let report = bootstrap.run()?;
    let code = report.exit_code();
    if code != 0 {
        boot_info!(
            "{}",
            msg!(MESSAGES.delegate.propagating, code = code.to_string())
        );
    }
    Ok(code)
}

/// Write the defaults to `<root>/bootstrap.yaml`; an existing file is kept.
fn write_default_config(root: &Path) -> Result<i32> {
    let path = root.join(CONFIG_FILE_NAME);
    if path.exists() {
        boot_warning!(
            "{}",
            msg!(MESSAGES.common.config_exists, path = path.display().to_string())
        );
        return Ok(EXIT_FAILURE);
    }

    save_to_path(&BootstrapConfig::default(), &path)?;
    boot_success!(
        "{}",
        msg!(MESSAGES.common.config_written, path = path.display().to_string())
    );
    Ok(0)
}

fn report_error(e: &BootError, debug_enabled: bool) {
    boot_error!("{}", msg!(MESSAGES.common.error_generic, error = e.to_string()));

    match e {
        BootError::ManifestMissing(manifest) => {
            let file = manifest
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| manifest.display().to_string());
            let root = manifest
                .parent()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default();
            boot_error_hint!(
                "{}",
                msg!(MESSAGES.install.manifest_hint, manifest = file, root = root)
            );
        }
        BootError::RuntimeMissing { .. } | BootError::RuntimeTooOld { .. } => {}
        _ if !debug_enabled => boot_error_hint!("{}", msg!(MESSAGES.common.debug_hint)),
        _ => {}
    }
}
