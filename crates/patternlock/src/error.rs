#![forbid(unsafe_code)]

//! Unified error type for the facade.

use std::fmt;

use patternlock_core::color::ParseColorError;
use patternlock_widgets::ConfigError;

/// Top-level error type for pattern lock hosts.
#[derive(Debug)]
pub enum Error {
    /// Configuration out of range.
    Config(ConfigError),
    /// Color string was not `#rrggbb` or `#rrggbbaa`.
    Color(ParseColorError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Color(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Color(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ParseColorError> for Error {
    fn from(err: ParseColorError) -> Self {
        Self::Color(err)
    }
}

/// Standard result type for patternlock APIs.
pub type Result<T> = std::result::Result<T, Error>;
