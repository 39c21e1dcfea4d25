//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Sparkify - load song and event datasets into a star-schema warehouse
#[derive(Parser, Debug)]
#[command(name = "sparkify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override target (database connection)
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drop and create the warehouse tables
    CreateTables(CreateTablesArgs),

    /// Load song data, then log data, into the warehouse
    Etl(EtlArgs),

    /// Show row counts of the warehouse tables
    Counts,
}

/// Arguments for the create-tables command
#[derive(Args, Debug)]
pub struct CreateTablesArgs {
    /// Keep existing tables and their rows, only create missing ones
    #[arg(long)]
    pub no_drop: bool,
}

/// Arguments for the etl command
#[derive(Args, Debug)]
pub struct EtlArgs {
    /// Load song data only
    #[arg(long, conflicts_with = "logs_only")]
    pub songs_only: bool,

    /// Load log data only
    #[arg(long)]
    pub logs_only: bool,

    /// Suppress per-file progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
