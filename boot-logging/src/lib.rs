//! Tracing setup for the bootstrap binary.
//!
//! Configured through the environment:
//! - `RUST_LOG` - full filter directives, wins over everything else
//! - `LOG_LEVEL` - level used when `RUST_LOG` is unset
//! - `LOG_OUTPUT` - `console` (default), `file`, `both` or `none`
//! - `LOG_FORMAT` - `human` (default) or `json`
//! - `LOG_FILE_PATH` - log file, rotated daily (default: `<tmp>/launcher-bootstrap.log`)
//!
//! Console logs are written to stderr; stdout belongs to the delegate.

use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::MakeWriter, prelude::*, registry, EnvFilter};

// --- Custom "Tee" Writer ---
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A, B> Write for Tee<A, B>
where
    A: Write,
    B: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res_a = self.a.write(buf);
        let res_b = self.b.write(buf);
        res_a.or(res_b)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

#[derive(Clone)]
struct MakeTee<A, B> {
    make_a: A,
    make_b: B,
}

impl<'a, A, B, W1, W2> MakeWriter<'a> for MakeTee<A, B>
where
    A: MakeWriter<'a, Writer = W1>,
    B: MakeWriter<'a, Writer = W2>,
    W1: Write + 'a,
    W2: Write + 'a,
{
    type Writer = Tee<W1, W2>;
    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            a: self.make_a.make_writer(),
            b: self.make_b.make_writer(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Console,
    File,
    Both,
    Off,
}

impl LogOutput {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => LogOutput::File,
            "both" => LogOutput::Both,
            "none" | "off" => LogOutput::Off,
            _ => LogOutput::Console,
        }
    }
}

fn default_log_file() -> PathBuf {
    env::temp_dir().join("launcher-bootstrap.log")
}

fn build_filter(default_level: &str) -> EnvFilter {
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initializes the global tracing subscriber.
///
/// `default_level` applies when neither `RUST_LOG` nor `LOG_LEVEL` is set.
/// The returned guard must be kept alive for file output to be flushed.
/// Calling this twice is harmless; the second subscriber is discarded.
pub fn init_subscriber(default_level: &str) -> Option<WorkerGuard> {
    let output = LogOutput::parse(&env::var("LOG_OUTPUT").unwrap_or_default());
    let is_json = env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let log_file_path = env::var("LOG_FILE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_log_file());

    let subscriber = registry().with(build_filter(default_level));

    let log_dir = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(env::temp_dir);
    let log_filename = log_file_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "launcher-bootstrap.log".into());

    let mut guard: Option<WorkerGuard> = None;

    match output {
        LogOutput::Both => {
            let file_appender = tracing_appender::rolling::daily(&log_dir, &log_filename);
            let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(file_guard);

            let tee_writer = MakeTee {
                make_a: io::stderr,
                make_b: non_blocking,
            };
            let fmt_layer = tracing_subscriber::fmt::layer().with_writer(tee_writer);
            if is_json {
                let _ = subscriber.with(fmt_layer.json()).try_init();
            } else {
                let _ = subscriber.with(fmt_layer.compact()).try_init();
            }
        }
        LogOutput::Console => {
            let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
            if is_json {
                let _ = subscriber.with(fmt_layer.json()).try_init();
            } else {
                let _ = subscriber.with(fmt_layer.compact()).try_init();
            }
        }
        LogOutput::File => {
            let file_appender = tracing_appender::rolling::daily(&log_dir, &log_filename);
            let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(file_guard);

            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            if is_json {
                let _ = subscriber.with(fmt_layer.json()).try_init();
            } else {
                let _ = subscriber.with(fmt_layer).try_init();
            }
        }
        LogOutput::Off => {}
    }

    guard
}
