//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{AppConfig, Cli, init_file_tracing, run_tui};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;

    init_file_tracing(config.log_file())?;
    info!(?config, "Starting noughts");

    run_tui(config).await
}
