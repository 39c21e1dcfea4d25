//! Sparkify CLI - loads song and event datasets into a star-schema warehouse

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{counts, create_tables, etl};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::CreateTables(args) => create_tables::execute(args, &cli.global).await,
        cli::Commands::Etl(args) => etl::execute(args, &cli.global).await,
        cli::Commands::Counts => counts::execute(&cli.global).await,
    }
}

/// Log to stderr; `RUST_LOG` wins over the `--verbose` default
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
