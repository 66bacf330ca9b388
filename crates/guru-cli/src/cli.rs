//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use guru_core::credentials::DEFAULT_KEY_FILE;

/// Guru - Spending insights for your expenses
#[derive(Parser)]
#[command(name = "guru")]
#[command(about = "Expense insight service for Financial Guru", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the analysis API server
    Serve {
        /// Port to listen on (defaults to $PORT, then 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Find the weekday with the highest spending
    Timeline {
        /// JSON file: an array of expenses or {"expenses": [...]}
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Generate tags for a new expense
    Tags {
        /// JSON file: {"new_expense": {...}, "past_expenses": [...]}
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Base64-encode a service account key for deployment
    ///
    /// Paste the output into the FIREBASE_CONFIG_BASE64 environment variable.
    EncodeKey {
        /// Service account key file
        #[arg(short, long, default_value = DEFAULT_KEY_FILE)]
        file: PathBuf,
    },
}
