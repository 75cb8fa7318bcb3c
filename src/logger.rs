//! Logging support for minised
//!
//! Diagnostics go to stderr at `warn` by default, raised by `-v`/`-vv` or the
//! `MINISED_LOG` env var. When debug mode is enabled via config, operations are
//! also appended to ~/.minised/minised.log.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

use crate::config::config_dir;

/// Env var that overrides the computed filter
pub const LOG_ENV: &str = "MINISED_LOG";

/// Initialize logging
///
/// Returns the path of the log file when file logging is active.
pub fn init_logging(verbosity: u8, debug_enabled: bool) -> Result<Option<PathBuf>> {
    let log_file = if debug_enabled { open_log_file() } else { None };

    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid {} filter: {}", LOG_ENV, directives))?,
        Err(_) => EnvFilter::new(default_directive(verbosity, log_file.is_some())),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let (file_layer, log_path) = match log_file {
        Some((file, path)) => (
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            ),
            Some(path),
        ),
        None => (None, None),
    };

    let subscriber = registry().with(stderr_layer).with(file_layer).with(filter);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(log_path)
}

/// Filter directive for a verbosity level
///
/// File logging needs at least `info` so that loads and writes are recorded.
pub fn default_directive(verbosity: u8, file_logging: bool) -> &'static str {
    match verbosity {
        0 if file_logging => "minised=info",
        0 => "minised=warn",
        1 => "minised=info",
        _ => "minised=debug",
    }
}

/// Get the log file path (~/.minised/minised.log)
pub fn log_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("minised.log"))
}

// Falls back to no file logging, with a warning, if the file cannot be opened
fn open_log_file() -> Option<(fs::File, PathBuf)> {
    let opened = log_file_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        Ok((file, path))
    });

    match opened {
        Ok(opened) => Some(opened),
        Err(e) => {
            eprintln!("Warning: Could not create log file: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(0, false), "minised=warn");
        assert_eq!(default_directive(1, false), "minised=info");
        assert_eq!(default_directive(2, false), "minised=debug");
        assert_eq!(default_directive(7, false), "minised=debug");
    }

    #[test]
    fn test_file_logging_raises_floor_to_info() {
        assert_eq!(default_directive(0, true), "minised=info");
        assert_eq!(default_directive(2, true), "minised=debug");
    }

    #[test]
    fn test_log_file_path() {
        if let Ok(path) = log_file_path() {
            assert!(path.ends_with(".minised/minised.log"));
        }
    }
}
