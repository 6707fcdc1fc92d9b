use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::AppConfig;

/// Overrides `server.origin` when set.
pub const ORIGIN_ENV: &str = "LAUNCHER_SERVER_URL";

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

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/launcher/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("launcher").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `AppConfig::default()`.
    /// - `LAUNCHER_SERVER_URL` replaces the configured origin.
    /// - The result is validated before it is returned.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            AppConfig::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(origin) = lookup(ORIGIN_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::debug!(origin = %origin, "origin overridden from environment");
            self.server.origin = origin.trim().to_string();
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The origin is an http(s) URL with a host part
    /// - No IPC message identifier is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let origin = self.server.normalized_origin();
        let host = origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"));

        match host {
            Some(host) if !host.is_empty() => {}
            _ => {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Server origin '{}' must be an http:// or https:// URL",
                        self.server.origin
                    ),
                })
            }
        }

        let messages = [
            ("drag", &self.ipc.drag),
            ("new_window", &self.ipc.new_window),
            ("exit", &self.ipc.exit),
        ];
        if let Some((name, _)) = messages.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("IPC message '{}' must not be empty", name),
            });
        }

        Ok(())
    }
}
