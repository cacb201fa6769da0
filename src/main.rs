//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `snap_profile` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use snap_profile::initialization::init_logger_with;
use snap_profile::{serve, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; every option has a default
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    serve(config).await.context("API server stopped")
}
