use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::session::Identity;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the content store lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL for reads (e.g., "https://feed.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Origin for writes. Usually the same host as `base_url`.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Identity used when the user signs in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Display name. Missing means the store sees "Unknown User".
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL. Missing means the placeholder avatar.
    #[serde(default)]
    pub image: Option<String>,
    /// Start the session signed in.
    #[serde(default)]
    pub signed_in: bool,
}

impl ProfileConfig {
    pub fn identity(&self) -> Identity {
        Identity {
            name: self.name.clone(),
            image: self.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How long finished notifications stay on screen (default: 3000).
    #[serde(default = "default_toast_ttl")]
    pub toast_ttl_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter directive used when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate() -> u64 {
    250
}

fn default_toast_ttl() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            origin: default_origin(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            toast_ttl_ms: default_toast_ttl(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}
