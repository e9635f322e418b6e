use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use storefront_pricing::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Commands that need no configuration
    match args.get_command() {
        cli::Commands::Version => {
            println!("Storefront Pricing v{}", env!("CARGO_PKG_VERSION"));
            println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
            return Ok(());
        }
        cli::Commands::Reload { pid } => {
            init_tracing("info", "text");
            return commands::reload::execute(pid);
        }
        _ => {}
    }

    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.server.log_level, &cfg.server.log_format);

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(cfg, args.config).await?;
        }
        cli::Commands::Quote {
            subtotal,
            region,
            weight,
            json,
        } => {
            commands::quote::execute(&cfg, subtotal, &region, weight, json)?;
        }
        cli::Commands::Preview { region } => {
            commands::preview::execute(&cfg, &region)?;
        }
        cli::Commands::Regions { zone } => {
            commands::regions::execute(&cfg, zone)?;
        }
        cli::Commands::Test => {
            commands::test::execute(&cfg, &args.config)?;
        }
        cli::Commands::Version | cli::Commands::Reload { .. } => {}
    }

    Ok(())
}
