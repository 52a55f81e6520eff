use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::config::types::{Config, SourceConfig};

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
    /// Uses `~/.config/profile-card/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("profile-card").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The source URL resolves to an absolute http(s) URL
    /// - Timeouts and the tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.source.user_url()?;

        if self.source.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "source.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.source.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "source.connect_timeout_seconds must be greater than zero".to_string(),
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

impl SourceConfig {
    /// Full URL of the current-user resource.
    pub fn user_url(&self) -> Result<Url, ConfigError> {
        if !self.user_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!("user_path '{}' must start with '/'", self.user_path),
            });
        }

        let base = Url::parse(&self.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid base_url '{}': {}", self.base_url, e),
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("base_url '{}' must use http or https", self.base_url),
            });
        }

        // Keep any path prefix on the base ("http://host/v1" + "/api/user").
        let joined = format!("{}{}", self.base_url.trim_end_matches('/'), self.user_path);
        Url::parse(&joined).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid user URL '{}': {}", joined, e),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}
