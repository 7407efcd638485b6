//! txtract CLI - UPI transaction history export parser
//!
//! Usage:
//!   txtract parse --file export.txt   Parse an export and print JSON
//!   txtract serve --port 3000         Start the upload server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The access log file is opened once for the lifetime of a production server
    let production = commands::is_production(std::env::var("TXTRACT_ENV").ok().as_deref());
    let (access_log, access_log_path) = match &cli.command {
        Commands::Serve { .. } if production => {
            let dir = commands::log_dir(std::env::var("TXTRACT_LOG_DIR").ok().as_deref());
            let file = commands::open_access_log(&dir)?;
            (Some(file), Some(dir.join(commands::ACCESS_LOG_FILE)))
        }
        _ => (None, None),
    };

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let access_layer = access_log.map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_filter(
                Targets::new().with_target(txtract_server::ACCESS_LOG_TARGET, Level::INFO),
            )
    });

    // Console logs go to stderr so `parse` output stays clean JSON
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
                .with_filter(filter),
        )
        .with(access_layer)
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            upload_dir,
            max_upload_mb,
        } => {
            let port = commands::resolve_port(port, std::env::var("PORT").ok().as_deref())?;
            commands::cmd_serve(
                &host,
                port,
                &upload_dir,
                max_upload_mb,
                access_log_path.as_deref(),
            )
            .await
        }
        Commands::Parse { file, pretty } => commands::cmd_parse(&file, pretty),
    }
}
