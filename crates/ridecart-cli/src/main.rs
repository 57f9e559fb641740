mod book;
mod catalog;
mod trip;

use clap::{Parser, Subcommand};
use ridecart_storefront::{CatalogSession, StorefrontClient};
use tracing_subscriber::EnvFilter;

use crate::book::BookCommands;
use crate::trip::TripCommands;

#[derive(Debug, Parser)]
#[command(name = "ridecart")]
#[command(about = "Quote and book chauffeured transfers and daily rentals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every vehicle in the storefront catalog
    Catalog,
    /// Price a trip on every vehicle that fits the party
    Quote {
        #[command(subcommand)]
        trip: TripCommands,
    },
    /// Create a checkout for one vehicle and print its URL
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ridecart_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let fees = ridecart_core::load_fee_table(&config.fees_path)?;
    let client = StorefrontClient::from_config(&config)?;
    let mut session = CatalogSession::new(client, fees);

    match cli.command {
        Commands::Catalog => catalog::run_catalog(&mut session).await?,
        Commands::Quote { trip } => {
            catalog::run_quote(&mut session, &trip.into_request()).await?;
        }
        Commands::Book { command } => {
            book::run_book(&mut session, command, &config.country_code).await?;
        }
    }

    Ok(())
}
