//! Noughts - tic-tac-toe in the terminal.
//!
//! The game state lives in [`noughts_core`]; this crate is the
//! presentation layer around it.
//!
//! # Architecture
//!
//! - **Config**: CLI flags ([`Cli`]) layered over an optional TOML file
//!   ([`AppConfig`])
//! - **TUI**: a ratatui/crossterm event loop ([`Controller`]) switching
//!   between the mode screen and the board screen
//! - **Screens**: each owns its state and turns key, mouse and timer events
//!   into [`ScreenTransition`]s

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod tui;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use logging::init_file_tracing;
pub use tui::{
    BoardScreen, Controller, ModeSelectScreen, Pending, Screen, ScreenTransition, Showing, run_tui,
};
