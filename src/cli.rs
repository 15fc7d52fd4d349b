//! Command-line argument parsing for Squint.
//!
//! Uses clap to parse CLI arguments and resolve the server to talk to.

use crate::config::{Config, ServerConfig};
use crate::error::{Result, SquintError};
use clap::Parser;
use std::path::PathBuf;

/// A terminal query console for remote SQL execution services.
#[derive(Parser, Debug)]
#[command(name = "squint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Execution service URL (e.g., http://localhost:1219)
    #[arg(value_name = "SERVER_URL")]
    pub server_url: Option<String>,

    /// Use named server from config
    #[arg(short = 's', long, value_name = "NAME")]
    pub server: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Execution endpoint identifier (shown in the status line, recorded
    /// with submissions)
    #[arg(short = 'e', long, value_name = "NAME")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Use an in-memory mock executor (for demos and testing)
    #[arg(long)]
    pub mock: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path, defaulting to the platform config dir.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::default_config_path)
    }

    /// Resolves the final server configuration.
    ///
    /// Precedence: positional URL, then the named server from config, then
    /// the config's "default" server. CLI overrides (timeout, endpoint)
    /// apply on top of whichever source won.
    pub fn resolve_server(&self, config: &Config) -> Result<Option<ServerConfig>> {
        let mut server = match &self.server_url {
            Some(url) => Some(ServerConfig::from_url(url)?),
            None => None,
        };

        if server.is_none() {
            if let Some(name) = self.server.as_deref() {
                server = config.get_server(Some(name)).cloned();
                if server.is_none() {
                    return Err(SquintError::config(format!(
                        "Server '{name}' not found in config file"
                    )));
                }
            }
        }

        if server.is_none() {
            server = config.get_server(None).cloned();
        }

        if let Some(ref mut s) = server {
            if let Some(timeout) = self.timeout {
                s.timeout_secs = Some(timeout);
            }
            if let Some(ref endpoint) = self.endpoint {
                s.endpoint = Some(endpoint.clone());
            }
        }

        Ok(server)
    }
}
