use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides `store.base_url`.
pub const BASE_URL_ENV: &str = "CHIRP_BASE_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/chirp/config.toml` on Linux, or the platform equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("chirp").join("config.toml")
    }

    /// Loads configuration from `path` and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` and layers the environment over it without validating.
    ///
    /// - A missing file yields `Config::default()`.
    /// - `CHIRP_BASE_URL`, when set and non-empty, replaces `store.base_url`.
    ///
    /// Callers that layer command-line flags on top validate afterwards.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Self::parse(&content, path)?
        } else {
            Config::default()
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.apply_base_url_override(&base_url);
        }

        Ok(config)
    }

    /// Parses TOML content without validating it.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn apply_base_url_override(&mut self, base_url: &str) {
        let base_url = base_url.trim();
        if !base_url.is_empty() {
            self.store.base_url = base_url.to_string();
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `store.base_url` and `store.origin` are absolute http(s) URLs
    /// - timeouts and the tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("store.base_url", &self.store.base_url)?;
        validate_url("store.origin", &self.store.origin)?;

        if self.store.timeout_seconds == 0 || self.store.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Store timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), ConfigError> {
    match reqwest::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        Ok(url) => Err(ConfigError::ValidationError {
            message: format!("{} must use http or https, got '{}'", field, url.scheme()),
        }),
        Err(e) => Err(ConfigError::ValidationError {
            message: format!("{} '{}' is not a valid URL: {}", field, value, e),
        }),
    }
}
