#![forbid(unsafe_code)]

//! Configuration errors.
//!
//! The tracker treats its configuration as a precondition and never checks
//! it on the event path. Hosts that build configurations from untrusted input
//! (files, settings screens) call [`PatternLockConfig::validate`] first.
//!
//! [`PatternLockConfig::validate`]: crate::config::PatternLockConfig::validate

use std::fmt;

/// A configuration value outside its supported range.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `rows` was zero.
    ZeroRows,
    /// `columns` was zero.
    ZeroColumns,
    /// `spacing` was negative.
    NegativeSpacing(i32),
    /// A ratio was non-finite or outside its allowed range.
    RatioOutOfRange {
        field: &'static str,
        value: f32,
        max: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRows => write!(f, "row count must be at least 1"),
            Self::ZeroColumns => write!(f, "column count must be at least 1"),
            Self::NegativeSpacing(spacing) => {
                write!(f, "spacing must not be negative (got {spacing})")
            }
            Self::RatioOutOfRange { field, value, max } => {
                write!(f, "{field} must be in [0, {max}) (got {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
