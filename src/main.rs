//! M3U group merger
//!
//! Fetches a target IPTV playlist and one or more source playlists, replaces
//! the target's `group-title` groups with the same-named groups of the
//! primary source, optionally takes one special group from its own
//! playlist, and writes the merged playlist to a file.

#![allow(dead_code)]

mod cli;
mod config;
mod config_file;
mod error;
mod fetch;
mod merge;
mod playlist;
mod run;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Args;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "m3u-group-merge";

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.write_default_config {
        init_logging("info");
        return match config_file::generate_default_config(path) {
            Ok(()) => {
                tracing::info!("Default configuration written to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let config = match args.into_merge_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level);
    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    tracing::debug!("Configuration loaded: {:?}", config);

    match run::run(&config).await {
        Ok((_, report)) => {
            for warning in &report.warnings {
                tracing::debug!("Non-fatal: {}", warning);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with tracing
fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("m3u_group_merge={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
