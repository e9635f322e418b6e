use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use storefront_pricing::pricing::DeliveryZone;

#[derive(Parser, Debug)]
#[command(name = "pricing", version, about = "Storefront order pricing service")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the pricing server (default)
    Start,

    /// Price an order from the command line
    Quote {
        /// Cart subtotal in rupees
        subtotal: Decimal,

        /// Destination state or union territory, e.g. "Tamil Nadu"
        region: String,

        /// Parcel weight in kg (defaults to the policy's default weight)
        #[arg(short, long)]
        weight: Option<Decimal>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the flat delivery charge for a region
    Preview {
        region: String,
    },

    /// List regions and their delivery zones
    Regions {
        /// Only list regions in this zone (local, nearby, medium, far)
        #[arg(short, long)]
        zone: Option<DeliveryZone>,
    },

    /// Reload the pricing policy of a running server (sends SIGHUP)
    Reload {
        /// PID of the running server
        #[arg(short, long)]
        pid: u32,
    },

    /// Test configuration file validity
    Test,

    /// Show version information
    Version,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
