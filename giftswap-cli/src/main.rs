mod commands;
mod config;
mod reward;

use clap::{Parser, Subcommand};
use commands::SetupArgs;
use config::CliConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "giftswap")]
#[command(about = "Classroom gift exchange: the gift you draw picks who goes next")]
#[command(version)]
struct Cli {
    /// Config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a live exchange
    Play {
        #[command(flatten)]
        setup: SetupArgs,
        /// Draw without waiting for Enter
        #[arg(long)]
        auto: bool,
        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play a whole exchange instantly and print the order
    Simulate {
        #[command(flatten)]
        setup: SetupArgs,
        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the roster and the gift pool a game would start with
    Roster {
        #[command(flatten)]
        setup: SetupArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter(cli.verbose)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;

    // Execute command
    let result = match cli.command {
        Commands::Play { setup, auto, seed } => commands::play(&config, &setup, auto, seed).await,
        Commands::Simulate { setup, seed, json } => commands::simulate(&config, &setup, seed, json),
        Commands::Roster { setup } => commands::show_roster(&config, &setup),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Filter for this binary's targets and the engine.
fn log_filter(verbose: bool) -> String {
    let log_level = if verbose { "debug" } else { "info" };
    format!(
        "{}={},giftswap_core={}",
        env!("CARGO_CRATE_NAME"),
        log_level,
        log_level
    )
}
