//! Application configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_core::Mode;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::cli::Cli;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Runtime settings for the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Pause before the computer moves and before the result dialog.
    computer_delay_ms: u64,

    /// Where log output goes; the terminal belongs to the UI.
    log_file: PathBuf,

    /// Seed for the computer opponent, random when absent.
    seed: Option<u64>,

    /// Mode to start in, skipping the mode screen.
    mode: Option<Mode>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: 500,
            log_file: PathBuf::from("noughts.log"),
            seed: None,
            mode: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a command line.
    ///
    /// An explicit `--config` must exist; the default path is optional.
    /// Flags on the command line win over the file.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };
        Ok(base.merge_cli(cli))
    }

    /// Applies command-line overrides.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(delay) = cli.delay_ms {
            self.computer_delay_ms = delay;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.mode.is_some() {
            self.mode = cli.mode;
        }
        self
    }

    /// The display delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
