#![forbid(unsafe_code)]

use std::fmt;

use patternlock_widgets::ConfigError;

/// Failure while loading or replaying a trace.
#[derive(Debug)]
pub enum ReplayError {
    /// Reading the trace or writing output failed.
    Io(std::io::Error),
    /// The trace is not valid JSON for the expected shape.
    Json(serde_json::Error),
    /// The trace configuration is out of range.
    Config(ConfigError),
    /// Bad command line or trace contents.
    Usage(String),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Json(err) => write!(f, "invalid trace: {err}"),
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Usage(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Usage(_) => None,
        }
    }
}

impl From<std::io::Error> for ReplayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<ConfigError> for ReplayError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
