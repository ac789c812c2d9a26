// ABOUTME: Global tracing bootstrap for host applications.
// ABOUTME: Builds the EnvFilter directive for a debug level and installs the fmt subscriber.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::level::DebugLevel;
use crate::verbosity::Verbosity;

/// Error returned when a global subscriber is already installed.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct InitError(String);

/// Filter for a debug level. Library events are emitted under the
/// `mcp_use` target; everything else stays at warn.
pub fn env_filter(level: DebugLevel) -> EnvFilter {
    let directive = match level {
        DebugLevel::Warn => "warn",
        DebugLevel::Info => "mcp_use=info,warn",
        DebugLevel::Debug => "mcp_use=debug,warn",
    };
    EnvFilter::new(directive)
}

/// Install a global fmt subscriber filtered for the handle's level.
/// RUST_LOG, when set, takes priority over the handle, the same way the
/// usual subscriber bootstrap honors it.
pub fn try_init(verbosity: &Verbosity) -> Result<(), InitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| env_filter(verbosity.level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| InitError(e.to_string()))
}
