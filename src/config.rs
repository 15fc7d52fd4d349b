//! Configuration management for Squint.
//!
//! Handles loading configuration from TOML files, with support for named
//! execution-service servers.

use crate::error::{Result, SquintError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use url::Url;

/// Main configuration structure for Squint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Named execution-service servers.
    #[serde(default)]
    pub servers: HashMap<String, ServerConfig>,
}

/// Execution-service server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Base URL of the execution service.
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Execution endpoint identifier shown in the status line and recorded
    /// with submissions.
    pub endpoint: Option<String>,
}

impl ServerConfig {
    /// Creates a server config from a base URL, validating the scheme.
    pub fn from_url(raw: &str) -> Result<Self> {
        let url = Url::parse(raw)
            .map_err(|e| SquintError::config(format!("Invalid server URL: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SquintError::config(format!(
                "Invalid scheme '{}'. Expected 'http' or 'https'",
                url.scheme()
            )));
        }

        Ok(Self {
            base_url: Some(raw.trim_end_matches('/').to_string()),
            timeout_secs: None,
            endpoint: None,
        })
    }

    /// The base URL, or an error if the config never set one.
    pub fn base_url(&self) -> Result<&str> {
        self.base_url
            .as_deref()
            .ok_or_else(|| SquintError::config("Server base URL is required"))
    }

    /// Display string for the status line (host without credentials).
    pub fn display_string(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| "(unset)".to_string())
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error; it yields the default (empty)
    /// configuration so the CLI URL alone is enough to run.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| SquintError::config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| SquintError::config(format!("Invalid config file: {e}")))
    }

    /// Gets a server by name, or the server named "default" when no name is
    /// given.
    pub fn get_server(&self, name: Option<&str>) -> Option<&ServerConfig> {
        self.servers.get(name.unwrap_or("default"))
    }
}

/// Returns the default config file path (`<config dir>/squint/config.toml`).
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("squint")
        .join("config.toml")
}
