//! Tracing initialization for the Ark MCP servers.
//!
//! Logs go to **stderr**. With the stdio transport, stdout carries the
//! JSON-RPC stream and any stray byte there corrupts the protocol.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Controls the log level and filtering. Examples:
//!   - `RUST_LOG=debug` - Enable debug logging for all modules
//!   - `RUST_LOG=ark_mcp_video=debug` - Enable debug for the video server only
//!   - `RUST_LOG=warn,ark_mcp_common=debug` - Warn by default, debug for common

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LEVEL: &str = "info";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the global tracing subscriber.
///
/// Uses `RUST_LOG` when set, `default_level` otherwise. ANSI colors are
/// disabled since stderr is usually captured by the host agent.
///
/// # Panics
///
/// Panics if a global subscriber is already installed. Use
/// [`try_init_tracing`] where that can happen.
///
/// # Example
///
/// ```no_run
/// use ark_mcp_common::tracing::init_tracing;
///
/// init_tracing("info");
/// tracing::info!("Server starting");
/// ```
pub fn init_tracing(default_level: &str) {
    if try_init_tracing(default_level).is_err() {
        panic!("global tracing subscriber already set");
    }
}

/// Try to initialize tracing, returning an error if already initialized.
///
/// # Returns
///
/// - `Ok(())` if initialization succeeded
/// - `Err(())` if a subscriber was already set
pub fn try_init_tracing(default_level: &str) -> Result<(), ()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(fmt_layer)
        .try_init()
        .map_err(|_| ())
}
