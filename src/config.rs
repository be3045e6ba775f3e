//! Configuration Module
//!
//! This module defines all configuration structures for the ticket registry.
//! Configuration is loaded from TOML files and parsed using serde.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
///
/// Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [api]
/// host = "127.0.0.1"
/// port = 8080
///
/// [data]
/// registry_path = "data/registry.toml"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// API server configuration
///
/// # Fields
/// - `host`: IP address to bind to (e.g., "127.0.0.1" or "0.0.0.0")
/// - `port`: TCP port to listen on (e.g., 8080)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

/// Seed data locations
///
/// Both paths are optional. When unset, the data compiled into the binary
/// is served.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    pub registry_path: Option<PathBuf>,
    pub prizes_path: Option<PathBuf>,
}

impl Config {
    /// Default location of the configuration file
    pub const DEFAULT_PATH: &'static str = "config/default.toml";

    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
