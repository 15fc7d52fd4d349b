//! Squint - a terminal query console for remote SQL execution services.

use std::sync::Arc;

use squint::api::{ExecutorClient, HttpExecutorClient, HttpExecutorConfig, MockExecutorClient};
use squint::cli::Cli;
use squint::config::Config;
use squint::error::{Result, SquintError};
use squint::{logging, tui};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Logs go to a file; stderr would corrupt the TUI.
    logging::init_file_logging();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    if cli.mock {
        info!("Starting with in-memory mock executor");
        let client: Arc<dyn ExecutorClient> = Arc::new(MockExecutorClient::new());
        return tui::run(client, cli.endpoint.as_deref().unwrap_or("mock")).await;
    }

    let server = cli.resolve_server(&config)?.ok_or_else(|| {
        SquintError::config(
            "No execution service configured. Pass a server URL or add one to the config file.",
        )
    })?;

    info!("Execution service: {}", server.display_string());

    let mut http_config = HttpExecutorConfig::new(server.base_url()?);
    if let Some(timeout) = server.timeout_secs {
        http_config = http_config.with_timeout(timeout);
    }

    let endpoint = server
        .endpoint
        .clone()
        .unwrap_or_else(|| "default".to_string());
    let client: Arc<dyn ExecutorClient> = Arc::new(HttpExecutorClient::new(http_config)?);

    tui::run(client, &endpoint).await
}
