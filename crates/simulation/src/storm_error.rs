// ---------------------------------------------------------------------------
// StormError: error types for the storm core
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors surfaced by the storm core.
///
/// Out-of-range parameters are never errors (they are clamped); the only
/// fatal-class condition is failing to allocate a particle buffer.
#[derive(Debug)]
pub enum StormError {
    /// Reserving storage for `requested` rain drops failed.
    Allocation { requested: u32 },
    /// Config file could not be read.
    Io(std::io::Error),
    /// Config file is not valid JSON for `StormConfig`.
    Parse(String),
}

impl fmt::Display for StormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StormError::Allocation { requested } => {
                write!(f, "Failed to allocate rain field for {requested} drops")
            }
            StormError::Io(e) => write!(f, "I/O error: {e}"),
            StormError::Parse(msg) => write!(f, "Config parse error: {msg}"),
        }
    }
}

impl std::error::Error for StormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StormError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StormError {
    fn from(e: std::io::Error) -> Self {
        StormError::Io(e)
    }
}

impl From<serde_json::Error> for StormError {
    fn from(e: serde_json::Error) -> Self {
        StormError::Parse(e.to_string())
    }
}
