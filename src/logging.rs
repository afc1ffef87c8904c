//! Tracing subscriber setup
//!
//! The TUI owns stdout, so interactive sessions log to a file in the data directory.
//! One-shot commands log to stderr. Filtering follows `ON_THIS_DAY_LOG` (default `warn`).

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ON_THIS_DAY_LOG";
pub const LOG_FILENAME: &str = "on-this-day.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to `<data_dir>/on-this-day.log`, appending
pub fn init_file(data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;
    let path = data_dir.join(LOG_FILENAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    // Ignore "already initialized" so tests and repeated calls don't fail
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
