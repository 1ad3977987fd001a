//! Diagnostic logging to disk.
//!
//! When enabled, installs a `tracing` subscriber writing to a daily log file
//! named `crabwatch_<date>.log` in the configured log directory (default:
//! `~/.local/share/crabwatch/logs/`). Stdout belongs to the terminal UI, so
//! nothing is ever logged there.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Install the file subscriber. Returns the log file path, or `None` if
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_file_path(&log_dir, chrono::Local::now().date_naive());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level = parse_level(&config.level);
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level.unwrap_or(Level::INFO))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    if level.is_none() {
        tracing::warn!(level = %config.level, "unknown log level, using info");
    }
    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}

fn parse_level(level: &str) -> Option<Level> {
    level.trim().parse().ok()
}

fn log_file_path(log_dir: &Path, date: chrono::NaiveDate) -> PathBuf {
    log_dir.join(format!("crabwatch_{}.log", date.format("%Y-%m-%d")))
}

/// Expand a leading `~/` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    match (dir.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if dir == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(dir)),
        _ => PathBuf::from(dir),
    }
}
