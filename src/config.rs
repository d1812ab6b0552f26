//! Configuration loading and management.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP listener configuration.
    pub server: ServerConfig,
    /// Data store configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the API listener (default: "0.0.0.0").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port for the API listener (default: 5000).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Prometheus metrics HTTP port (default: 9090, 0 disables).
    pub metrics_port: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            metrics_port: None,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Data store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-memory store seeded with fixture data. For development and tests.
    Memory,
    /// Persistent SQLite store.
    #[default]
    Sqlite,
}

/// Data store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which backend to construct at startup.
    #[serde(default)]
    pub backend: StorageBackend,
    /// Path to the SQLite database file (ignored by the memory backend).
    #[serde(default = "default_db_path")]
    pub path: String,
    /// Seed an empty SQLite database with the fixture content set.
    #[serde(default)]
    pub seed: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_db_path(),
            seed: false,
        }
    }
}

fn default_db_path() -> String {
    "cordia.db".to_string()
}
