use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use storefront_pricing::{config::Config, server};
use tracing::info;

/// Execute the start command
///
/// Serves the HTTP API until SIGTERM/SIGINT. `config_path` is re-read on
/// SIGHUP.
pub async fn execute(cfg: Config, config_path: PathBuf) -> Result<()> {
    println!("{}", "Starting storefront pricing...".green());
    info!(
        "Starting storefront pricing with config {}",
        config_path.display()
    );

    server::start_server(cfg, config_path).await?;

    Ok(())
}
