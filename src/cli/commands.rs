//! CLI command implementations

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::http_server::HttpServer;
use crate::storage::Store;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(config.as_deref()),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Create the database file and tables, then exit
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;

    block_on(async {
        let store = open_store(&config).await?;
        store.close().await;
        Ok(())
    })?;

    println!("Initialized database at {}", config.database_path.display());
    Ok(())
}

/// Open the store and serve HTTP until stopped
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    block_on(async {
        let store = open_store(&config).await?;
        let server = HttpServer::with_config(store, config.http.clone());
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

async fn open_store(config: &Config) -> CliResult<Store> {
    let store = Store::open(&config.database_path).await?;
    store.init_schema().await?;
    tracing::info!(path = %config.database_path.display(), "database ready");
    Ok(store)
}

fn block_on<F>(future: F) -> CliResult<()>
where
    F: std::future::Future<Output = CliResult<()>>,
{
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))?;
    rt.block_on(future)
}

/// Install the global subscriber. Honors `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
