//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod import;
pub mod serve;

use clap::{Parser, Subcommand};

/// Radius-bounded geospatial lookup service
#[derive(Parser)]
#[command(name = "georadius")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import datasets and start the HTTP server (foreground)
    Serve(serve::ServeArgs),

    /// Validate a dataset file offline and print import statistics
    Import(import::ImportArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Import(args) => import::run(args),
        Commands::Config(args) => config::run(args),
    }
}
