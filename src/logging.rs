//! Tracing setup.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to `log_file` so it does not tear the terminal UI.
///
/// `RUST_LOG` controls the filter (default `info`). Calling this twice is
/// harmless; the second subscriber is dropped.
pub fn init_file_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
