// ABOUTME: Library root for mcp-use-logging, the verbosity switch for the mcp-use agent library.
// ABOUTME: Re-exports the debug level, the shared verbosity handle, component loggers, and the tracing bootstrap.

pub mod level;
pub mod logger;
pub mod subscriber;
pub mod verbosity;

pub use level::{DebugLevel, LevelParseError};
pub use logger::ComponentLogger;
pub use subscriber::{InitError, env_filter, try_init};
pub use verbosity::Verbosity;
