//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/wellspring/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/wellspring/` (~/.config/wellspring/)
//! - Data: `$XDG_DATA_HOME/wellspring/` (~/.local/share/wellspring/)
//! - State/Logs: `$XDG_STATE_HOME/wellspring/` (~/.local/state/wellspring/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Analytics configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Trailing window, in days, used to scope dashboard moods and
    /// journals. The per-statistic 7/14/30-day windows are fixed and
    /// not configurable.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
        }
    }
}

fn default_lookback_days() -> u32 {
    30
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/wellspring/config.toml`
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("wellspring").join("config.toml")
    }

    /// Returns the data directory path (for record snapshots)
    ///
    /// `$XDG_DATA_HOME/wellspring/`
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("wellspring")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/wellspring/`
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("wellspring")
    }

    /// Returns the default records snapshot path
    ///
    /// `$XDG_DATA_HOME/wellspring/records.json`
    pub fn records_path() -> PathBuf {
        Self::data_dir().join("records.json")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/wellspring/wellspring.log`
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("wellspring.log")
    }
}
