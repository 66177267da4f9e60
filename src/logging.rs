//! Diagnostic log setup.
//!
//! The terminal UI owns stdout, so while it runs diagnostics go to a file.
//! CLI report commands log to stderr instead. `RUST_LOG` overrides the
//! default `info` level in both cases.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::StorefrontConfig;
use crate::error::{StorefrontError, StorefrontResult};

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Open (append) the log file, creating parent directories.
pub fn open_log_file(path: &Path) -> StorefrontResult<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorefrontError::io(parent, e))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StorefrontError::io(path, e))
}

/// Send diagnostics to the configured log file.
///
/// Returns the file path, or `None` when no path could be resolved, in which
/// case diagnostics are dropped.
pub fn init_file_logging(config: &StorefrontConfig) -> StorefrontResult<Option<PathBuf>> {
    let Some(path) = config.log_file_path() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(Some(path))
}

/// Send diagnostics to stderr.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
