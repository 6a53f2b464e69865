//! Command-line interface for noughts.

use clap::Parser;
use noughts_core::Mode;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a friend or a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the mode screen and start straight away (friend or computer)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Milliseconds to wait before the computer answers and before the result dialog
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// File that receives the log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
