//! Configuration management for pixeltodo
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DATABASE_FILE_NAME, DEFAULT_CURSOR_BLINK_TICKS,
    DEFAULT_MAX_INPUT_LENGTH, DEFAULT_PAGE_SIZE, DEFAULT_TICK_RATE_HZ, MAX_PAGE_SIZE,
};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Comment written above each field by `generate_default_config`
const FIELD_COMMENTS: &[(&str, &str, &str)] = &[
    ("ui", "page_size", "Cards shown per page in both lists, 1..=5"),
    ("ui", "tick_rate_hz", "Frames rendered per second, 1..=240"),
    ("ui", "max_input_length", "Maximum characters accepted by an input box, 1..=500"),
    ("ui", "cursor_blink_ticks", "Frames between two flips of the text cursor, at least 1"),
    ("ui", "confirm_toggle", "Ask before toggling a task from its checkbox"),
    ("ui", "mouse_enabled", "Capture mouse events in the terminal"),
    ("storage", "database_path", "SQLite database file; empty uses the data directory"),
    ("logging", "enabled", "Write a log file to the data directory"),
    ("logging", "level", "One of error, warn, info, debug, trace"),
];

/// Put a `# ...` line above every known `key = value` line of a serialized config.
fn annotate_fields(toml_content: &str) -> String {
    let mut section = "";
    let mut out = String::with_capacity(toml_content.len() * 2);
    for line in toml_content.lines() {
        let trimmed = line.trim();
        if let Some(name) = trimmed.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            section = name;
        } else if let Some((key, _)) = trimmed.split_once('=') {
            let key = key.trim();
            if let Some((_, _, comment)) = FIELD_COMMENTS.iter().find(|(s, k, _)| *s == section && *k == key) {
                out.push_str("# ");
                out.push_str(comment);
                out.push('\n');
            }
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Number of cards shown per page in both list views
    pub page_size: usize,
    /// Frames rendered per second
    pub tick_rate_hz: u32,
    /// Maximum number of characters accepted by the input boxes
    pub max_input_length: usize,
    /// Frames between two flips of the text cursor
    pub cursor_blink_ticks: u32,
    /// Ask for confirmation before toggling a task from its checkbox
    pub confirm_toggle: bool,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file (empty = default data directory)
    pub database_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            cursor_blink_ticks: DEFAULT_CURSOR_BLINK_TICKS,
            confirm_toggle: false,
            mouse_enabled: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level into a `LevelFilter`
    pub fn level_filter(&self) -> Result<LevelFilter> {
        match self.level.to_ascii_lowercase().as_str() {
            "error" => Ok(LevelFilter::Error),
            "warn" => Ok(LevelFilter::Warn),
            "info" => Ok(LevelFilter::Info),
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            other => anyhow::bail!("Invalid logging level '{}'", other),
        }
    }
}

impl StorageConfig {
    /// Resolve the database file location, falling back to the data directory
    pub fn resolve_database_path(&self) -> Result<PathBuf> {
        if !self.database_path.trim().is_empty() {
            return Ok(PathBuf::from(&self.database_path));
        }
        Ok(Config::get_data_dir()?.join(DATABASE_FILE_NAME))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.page_size == 0 || self.ui.page_size > MAX_PAGE_SIZE {
            anyhow::bail!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE,
                self.ui.page_size
            );
        }

        if self.ui.tick_rate_hz == 0 || self.ui.tick_rate_hz > 240 {
            anyhow::bail!("tick_rate_hz must be between 1 and 240, got {}", self.ui.tick_rate_hz);
        }

        if self.ui.max_input_length == 0 || self.ui.max_input_length > 500 {
            anyhow::bail!(
                "max_input_length must be between 1 and 500, got {}",
                self.ui.max_input_length
            );
        }

        if self.ui.cursor_blink_ticks == 0 {
            anyhow::bail!("cursor_blink_ticks must be at least 1");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# pixeltodo Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &annotate_fields(&toml_content);

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }

    /// Get the directory holding the database and the log file
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }
}
