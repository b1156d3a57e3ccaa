//! CLI module for mcpscout
//!
//! Handles command-line argument parsing and logging setup.

pub mod args;

pub use args::{Args, Commands, Verbosity};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber; `RUST_LOG` overrides verbosity flags
pub fn init_logging(verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}
