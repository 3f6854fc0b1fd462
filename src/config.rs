use std::env;
use std::path::PathBuf;

use crate::services::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECONDS};
use crate::services::history::DEFAULT_MAX_HISTORY;

#[derive(Debug, Clone)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // weatherapi.com
    pub weatherapi_base_url: String,
    pub weatherapi_key: String,
    pub weatherapi_timeout_seconds: u64,

    // API settings
    pub api_host: String,
    pub api_port: u16,
    pub static_dir: PathBuf,

    // Caching
    pub cache_ttl_seconds: u64,
    pub cache_max_entries: usize,

    // Search history
    pub history_max_entries: usize,

    // Application metadata
    pub deployment: Deployment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weatherapi_base_url: "https://api.weatherapi.com/v1".to_string(),
            weatherapi_key: String::new(),
            weatherapi_timeout_seconds: 10,
            api_host: "0.0.0.0".to_string(),
            api_port: 3000,
            static_dir: PathBuf::from("public"),
            cache_ttl_seconds: DEFAULT_TTL_SECONDS,
            cache_max_entries: DEFAULT_MAX_ENTRIES,
            history_max_entries: DEFAULT_MAX_HISTORY,
            deployment: Deployment::Local,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if `WEATHERAPI_KEY` is not set and
    /// `ConfigError::Invalid` if a store capacity is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let config = Self {
            // weatherapi.com
            weatherapi_base_url: env::var("WEATHERAPI_BASE_URL")
                .unwrap_or(defaults.weatherapi_base_url),
            weatherapi_key: env::var("WEATHERAPI_KEY")
                .map_err(|_| ConfigError::Missing("WEATHERAPI_KEY"))?,
            weatherapi_timeout_seconds: env::var("WEATHERAPI_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.weatherapi_timeout_seconds),

            // API settings
            api_host: env::var("API_HOST").unwrap_or(defaults.api_host),
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.api_port),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),

            // Caching
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_seconds), // 5 minutes default
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_max_entries),

            // Search history
            history_max_entries: env::var("HISTORY_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.history_max_entries),

            // Application metadata
            deployment: Deployment::from_str(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        };

        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a store capacity is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_max_entries == 0 {
            return Err(ConfigError::Invalid("CACHE_MAX_ENTRIES", "must be at least 1"));
        }
        if self.history_max_entries == 0 {
            return Err(ConfigError::Invalid("HISTORY_MAX_ENTRIES", "must be at least 1"));
        }
        Ok(())
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
}
