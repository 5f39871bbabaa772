//! Logging setup for the command-line tool.
//!
//! Diagnostics go to stderr so stdout carries only the exported colors.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `hueport_resolve=debug`.
pub const LOG_ENV: &str = "HUEPORT_LOG";

/// Maps `-v` occurrences to a default level.
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter: `HUEPORT_LOG` wins, otherwise the verbosity level.
pub fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(verbose: u8) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
