//! Verdant CLI - Command-line interface for the plant asset pipeline

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{catalog, sync};

#[derive(Parser)]
#[command(name = "verdant")]
#[command(about = "Plant catalog image asset pipeline", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download generated images for every plant in the catalog
    Sync {
        /// Path to the plant catalog JSON file
        catalog: String,

        /// Root directory the .imageset bundles are written under
        #[arg(long, default_value = "assets")]
        assets: String,

        /// Provider to use (pollinations, mock)
        #[arg(long)]
        provider: Option<String>,

        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Delay between requests in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Accept untrusted TLS certificates from the image endpoint
        #[arg(long)]
        insecure: bool,

        /// Load config from this file instead of the layered defaults
        #[arg(long)]
        config: Option<String>,
    },

    /// Catalog inspection
    #[command(subcommand)]
    Catalog(catalog::CatalogCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sync {
            catalog,
            assets,
            provider,
            width,
            height,
            delay_ms,
            insecure,
            config,
        } => sync::run(
            &catalog,
            &assets,
            provider.as_deref(),
            width,
            height,
            delay_ms,
            insecure,
            config.as_deref(),
        ),
        Commands::Catalog(cmd) => catalog::run(cmd),
    }
}
