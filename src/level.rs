// ABOUTME: Defines DebugLevel, the three-tier verbosity setting (0/1/2).
// ABOUTME: Level 0 passes warnings only, 1 adds info, 2 adds debug detail.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Error returned when a value does not name one of the three debug levels.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid debug level {0:?}: expected 0, 1, or 2")]
pub struct LevelParseError(pub String);

/// The three-tier verbosity setting, totally ordered Warn < Info < Debug.
/// A message tagged with a tier is emitted only when the configured level
/// is at or above that tier. The default is Info, matching normal operation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum DebugLevel {
    /// Level 0: warnings and errors only.
    Warn = 0,
    /// Level 1: informational messages about agent operation.
    #[default]
    Info = 1,
    /// Level 2: full debug detail.
    Debug = 2,
}

impl DebugLevel {
    /// The tracing filter this level corresponds to.
    pub fn as_filter(self) -> LevelFilter {
        match self {
            DebugLevel::Warn => LevelFilter::WARN,
            DebugLevel::Info => LevelFilter::INFO,
            DebugLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

impl From<DebugLevel> for u8 {
    fn from(level: DebugLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for DebugLevel {
    type Error = LevelParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DebugLevel::Warn),
            1 => Ok(DebugLevel::Info),
            2 => Ok(DebugLevel::Debug),
            other => Err(LevelParseError(other.to_string())),
        }
    }
}

impl FromStr for DebugLevel {
    type Err = LevelParseError;

    /// Parses the exact strings "0", "1", and "2", the documented values
    /// of the DEBUG and MCP_USE_DEBUG environment variables.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(DebugLevel::Warn),
            "1" => Ok(DebugLevel::Info),
            "2" => Ok(DebugLevel::Debug),
            other => Err(LevelParseError(other.to_string())),
        }
    }
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
