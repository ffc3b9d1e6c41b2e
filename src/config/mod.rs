mod loader;
mod types;

pub use loader::{ConfigError, BASE_URL_ENV};
pub use types::{Config, LoggingConfig, ProfileConfig, StoreConfig, UiConfig};
