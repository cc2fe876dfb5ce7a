//! File logging built on `fern`.
//!
//! The terminal UI owns stdout, so log records only ever go to a file in the
//! data directory, and only when logging is enabled in the configuration.

use crate::config::{Config, LoggingConfig};
use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Install the global logger according to `config`.
///
/// Returns the log file path when logging was enabled, `None` otherwise.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    build_dispatch(config.level_filter()?, &path)?
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}

/// Build a dispatch writing timestamped records to `path`, creating parent directories.
pub fn build_dispatch(level: LevelFilter, path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn)
        .chain(file))
}

/// Location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
}
