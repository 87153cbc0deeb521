//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout/stderr while it runs, so TUI sessions log to a
//! file. Headless commands log to stderr. `RUST_LOG` overrides the level.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, with ANSI colors
    Stderr,
    /// Append to a file, plain text
    File(PathBuf),
}

/// Default filter directive for the given verbosity.
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global tracing subscriber.
pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install stderr logger")?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context(format!(
                    "Failed to create log directory: {}",
                    parent.display()
                ))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .context(format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
                .context("Failed to install file logger")?;
        }
    }

    Ok(())
}

/// Installs the subscriber, or reports why it could not and carries on unlogged.
///
/// Returns whether logging is active. The report goes to stderr before the TUI
/// takes over the terminal.
pub fn init_or_warn(verbose: bool, target: Option<LogTarget>) -> bool {
    let result = target
        .context("No log location available")
        .and_then(|target| init(verbose, target));
    match result {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            false
        }
    }
}
