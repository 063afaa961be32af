//! Configuration loaded from `noughts.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// User-facing settings for the terminal game.
///
/// Every key is optional; missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File the tracing subscriber writes to while the TUI owns the terminal.
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Label empty cells with the digit key that plays them.
    show_cell_numbers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("noughts.log"),
            log_filter: "info".to_string(),
            show_cell_numbers: true,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            let config = Self::from_file(path)?;
            info!("Config loaded");
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Log filter from `RUST_LOG`, falling back to `log_filter`.
    pub fn env_filter(&self) -> EnvFilter {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        self.filter_for(rust_log.as_deref())
    }

    /// Builds the filter from an explicit `RUST_LOG` value.
    ///
    /// Unset, empty or unparsable directives fall back to `log_filter`.
    pub fn filter_for(&self, rust_log: Option<&str>) -> EnvFilter {
        rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(&self.log_filter))
    }

    /// Replaces the log file location.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("show_cell_numbers = false\n").unwrap();
        assert!(!config.show_cell_numbers());
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_filter_falls_back_to_config() {
        let config = Config::from_toml("log_filter = \"debug\"\n").unwrap();
        assert_eq!(
            config.filter_for(None).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            config.filter_for(Some("  ")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            config.filter_for(Some("warn")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = Config::from_toml("show_cell_numbers = \"maybe\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
