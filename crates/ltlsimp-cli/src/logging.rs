//! Tracing setup for the ltlsimp CLI
//!
//! Library crates log through `tracing` macros; the binary installs a compact
//! fmt layer writing to stderr.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// Filter precedence: `--debug`, then `RUST_LOG`, then the configured level.
pub fn init(log_level: &str, debug: bool, ansi: bool) -> Result<()> {
    let env_filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(log_level))
            .with_context(|| format!("Invalid log level: {}", log_level))?
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(debug)
        .with_ansi(ansi)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
