//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// txtract - Turn UPI transaction history exports into JSON
#[derive(Parser)]
#[command(name = "txtract")]
#[command(about = "Parse plain-text UPI transaction history exports", long_about = None)]
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
    /// Start the upload server
    Serve {
        /// Port to listen on (falls back to $PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory uploads are spooled into while being parsed
        #[arg(long, default_value = "uploads")]
        upload_dir: PathBuf,

        /// Largest accepted upload, in megabytes
        #[arg(long, default_value = "10")]
        max_upload_mb: usize,
    },

    /// Parse a local export and print the JSON result
    Parse {
        /// Plain-text export to parse
        #[arg(short, long)]
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
