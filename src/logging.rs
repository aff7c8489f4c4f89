//! Diagnostic logging setup.
//!
//! Library code logs through `tracing` macros; the binary installs one
//! `tracing_subscriber::fmt` subscriber here. `RUST_LOG` always takes
//! precedence over the built-in default filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive when `RUST_LOG` is not set.
///
/// Interactive playback owns the terminal, so without a log file nothing
/// may be written to stderr.
pub fn default_directive(verbose: bool, interactive: bool, to_file: bool) -> &'static str {
    match (interactive && !to_file, verbose) {
        (true, _) => "off",
        (false, true) => "mtreplay=debug,warn",
        (false, false) => "mtreplay=info,warn",
    }
}

/// Initialize the logging system.
///
/// With `log_file`, output is appended to that file without ANSI colors;
/// otherwise it goes to stderr.
pub fn init(log_file: Option<&Path>, verbose: bool, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(default_directive(verbose, interactive, log_file.is_some()))
    });
    let registry = tracing_subscriber::registry().with(filter);

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
        None => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
