// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Logging init: structured output on stderr so stdout stays free for command output.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn,notefold=info";

/// Install the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!("logging initialized");
    Ok(())
}
