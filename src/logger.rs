// ABOUTME: ComponentLogger, the named logger owned by one constructed component.
// ABOUTME: Carries a clone of the shared verbosity handle plus the component's own verbose flag.

use crate::level::DebugLevel;
use crate::verbosity::Verbosity;

/// Per-component logger. The `verbose` flag mirrors the constructor
/// parameter of the same name: it raises this one component's threshold
/// to the debug tier without writing to the shared handle, so every
/// other component keeps observing the configured level.
#[derive(Debug, Clone)]
pub struct ComponentLogger {
    name: String,
    verbosity: Verbosity,
    verbose: bool,
}

impl ComponentLogger {
    /// Create a logger for the named component. Verbose is off unless
    /// raised with [`ComponentLogger::with_verbose`].
    pub fn new(name: impl Into<String>, verbosity: Verbosity) -> Self {
        Self {
            name: name.into(),
            verbosity,
            verbose: false,
        }
    }

    /// Toggle this component's own verbose flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Component name attached to every emitted message.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The threshold this component logs at: the shared level, or the
    /// debug tier when its own verbose flag is set.
    pub fn effective_level(&self) -> DebugLevel {
        if self.verbose {
            DebugLevel::Debug
        } else {
            self.verbosity.level()
        }
    }

    fn allows(&self, required: DebugLevel) -> bool {
        required <= self.effective_level()
    }

    pub fn warn(&self, message: &str) {
        if self.allows(DebugLevel::Warn) {
            tracing::warn!(target: "mcp_use", component = %self.name, "{message}");
        }
    }

    pub fn info(&self, message: &str) {
        if self.allows(DebugLevel::Info) {
            tracing::info!(target: "mcp_use", component = %self.name, "{message}");
        }
    }

    pub fn debug(&self, message: &str) {
        if self.allows(DebugLevel::Debug) {
            tracing::debug!(target: "mcp_use", component = %self.name, "{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_shared_level_by_default() {
        let verbosity = Verbosity::new(DebugLevel::Warn);
        let logger = ComponentLogger::new("agent", verbosity.clone());

        assert_eq!(logger.effective_level(), DebugLevel::Warn);

        verbosity.set_debug(DebugLevel::Debug);
        assert_eq!(logger.effective_level(), DebugLevel::Debug);
    }

    #[test]
    fn verbose_raises_only_this_component() {
        let verbosity = Verbosity::new(DebugLevel::Info);
        let chatty = ComponentLogger::new("agent", verbosity.clone()).with_verbose(true);
        let quiet = ComponentLogger::new("client", verbosity.clone());

        assert_eq!(chatty.effective_level(), DebugLevel::Debug);
        assert_eq!(quiet.effective_level(), DebugLevel::Info);
        assert_eq!(verbosity.level(), DebugLevel::Info);
    }

    #[test]
    fn verbose_never_lowers_the_shared_level() {
        let verbosity = Verbosity::new(DebugLevel::Debug);
        let logger = ComponentLogger::new("agent", verbosity).with_verbose(false);

        assert_eq!(logger.effective_level(), DebugLevel::Debug);
    }

    #[test]
    fn keeps_the_component_name() {
        let logger = ComponentLogger::new("server-manager", Verbosity::default());
        assert_eq!(logger.name(), "server-manager");
        assert!(!logger.is_verbose());
        assert!(logger.clone().with_verbose(true).is_verbose());
    }
}
