//! Application configuration loaded from YAML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "MARKET_CONFIG";
/// Environment variable overriding the listening port.
pub const PORT_ENV: &str = "MARKET_PORT";
/// File read when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid MARKET_PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Capacity of each actor's mailbox.
    pub mailbox_size: usize,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            mailbox_size: 32,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads a YAML file. Fields missing from the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`AppConfig::load`], but a file that does not exist yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Configuration for the binary: the file named by `MARKET_CONFIG`
    /// (or `config/default.yaml`), then the `MARKET_PORT` override.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load_or_default(&path)?;
        if let Ok(port) = std::env::var(PORT_ENV) {
            config.override_port(&port)?;
        }
        Ok(config)
    }

    pub fn override_port(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.port = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
        Ok(())
    }

    /// `host:port`, ready for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
