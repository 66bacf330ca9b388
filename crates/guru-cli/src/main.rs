//! Guru CLI - Expense insight service
//!
//! Usage:
//!   guru serve --port 5000          Start web server
//!   guru timeline --file FILE       Peak spending weekday from a JSON file
//!   guru tags --file FILE           Tags for a new expense from a JSON file
//!   guru encode-key --file FILE     Base64-encode a service account key

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve { port, host } => commands::cmd_serve(&host, port).await,
        Commands::Timeline { file } => commands::cmd_timeline(&file),
        Commands::Tags { file } => commands::cmd_tags(&file),
        Commands::EncodeKey { file } => commands::cmd_encode_key(&file),
    }
}
