//! Tracing setup for the folio CLI
//!
//! Usage:
//!   folio --debug ...              # Debug logging to stderr
//!   RUST_LOG=folio_core=debug folio ...  # Fine-grained log control
//!
//! The interactive browser owns the terminal, so it stays silent unless
//! `--debug` or `RUST_LOG` asks for output.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
    /// Running the full-screen browser
    pub interactive: bool,
}

impl TracingConfig {
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.interactive {
            "off"
        } else {
            "info"
        }
    }
}

/// Initialize console tracing on stderr
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
