// ABOUTME: The shared verbosity handle holding the process-wide debug level.
// ABOUTME: Bootstraps from DEBUG / MCP_USE_DEBUG and exposes the runtime setter and the emit check.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::level::DebugLevel;

/// Environment variable consulted first. Set it inline for a single
/// process invocation: `DEBUG=2 your-agent-binary`.
pub const DEBUG_ENV: &str = "DEBUG";

/// Environment variable consulted second, the persistent form exported
/// from a shell profile or an env file.
pub const MCP_USE_DEBUG_ENV: &str = "MCP_USE_DEBUG";

/// Cloneable handle to the shared debug level. Clones point at the same
/// cell, so `set_debug` through any clone takes effect immediately for
/// all of them. Call sites receive this handle explicitly instead of
/// consulting a hidden global.
#[derive(Debug, Clone)]
pub struct Verbosity {
    level: Arc<AtomicU8>,
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::new(DebugLevel::default())
    }
}

impl Verbosity {
    /// Create a handle pinned at the given level.
    pub fn new(level: DebugLevel) -> Self {
        Self {
            level: Arc::new(AtomicU8::new(level as u8)),
        }
    }

    /// Bootstrap the level from the environment.
    ///
    /// Environment variables, in consultation order:
    /// - DEBUG: `1` or `2`, scoped to a single invocation
    /// - MCP_USE_DEBUG: `1` or `2`, the persistent form
    ///
    /// A variable that is unset or does not hold a recognized value
    /// falls through to the next source; the final fallback is level 1.
    /// This never fails: only the exact documented strings are acted on.
    pub fn from_env() -> Self {
        let level = [DEBUG_ENV, MCP_USE_DEBUG_ENV]
            .iter()
            .find_map(|var| std::env::var(var).ok()?.parse::<DebugLevel>().ok())
            .unwrap_or_default();
        Self::new(level)
    }

    /// Set the debug level at runtime. Visible to every clone of this
    /// handle for all subsequent emissions.
    pub fn set_debug(&self, level: DebugLevel) {
        self.level.store(level as u8, Ordering::Release);
    }

    /// The currently configured level.
    pub fn level(&self) -> DebugLevel {
        // The cell only ever holds a value stored from a DebugLevel.
        DebugLevel::try_from(self.level.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Whether a message tagged with `required` would currently be emitted.
    pub fn allows(&self, required: DebugLevel) -> bool {
        required <= self.level()
    }

    /// Emit `message` at the given tier, or discard it silently when the
    /// current level is below that tier. Suppression is normal operation.
    pub fn emit(&self, required: DebugLevel, message: &str) {
        if !self.allows(required) {
            return;
        }
        match required {
            DebugLevel::Warn => tracing::warn!(target: "mcp_use", "{message}"),
            DebugLevel::Info => tracing::info!(target: "mcp_use", "{message}"),
            DebugLevel::Debug => tracing::debug!(target: "mcp_use", "{message}"),
        }
    }
}
