#![forbid(unsafe_code)]

//! Gesture tracker configuration.
//!
//! [`PatternLockConfig`] is an explicit, immutable-by-default bundle of every
//! behavioural knob the tracker reads. It is passed at construction; the few
//! values that may change at runtime (secure mode, auto-reset) have dedicated
//! setters on [`PatternLockState`](crate::tracker::PatternLockState).

use web_time::Duration;

use crate::error::ConfigError;

/// Default row count.
pub const DEFAULT_ROWS: usize = 3;
/// Default column count.
pub const DEFAULT_COLUMNS: usize = 3;
/// Default spacing between dots, in pixels.
pub const DEFAULT_SPACING: i32 = 24;
/// Default fraction of the cell width excluded from each side of the hit area.
pub const DEFAULT_HIT_AREA_PADDING_RATIO: f32 = 0.2;
/// Default indicator arrow size relative to the cell radius.
pub const DEFAULT_INDICATOR_SIZE_RATIO: f32 = 0.2;
/// Default time a successful pattern stays visible before auto-reset.
pub const DEFAULT_SUCCESS_DURATION: Duration = Duration::from_millis(400);
/// Default time a rejected pattern stays visible before auto-reset.
pub const DEFAULT_ERROR_DURATION: Duration = Duration::from_millis(400);

/// How selected cells are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineStyle {
    /// One continuous line through the cell centers, extended live to the
    /// pointer.
    #[default]
    Common,
    /// Segments clipped to the cell circles, with an arrow at each interior
    /// cell pointing at the next one.
    Indicator,
}

/// Tracker configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatternLockConfig {
    /// Number of rows (default: 3).
    pub rows: usize,
    /// Number of columns (default: 3).
    pub columns: usize,
    /// Gap between neighbouring dots in pixels; each cell is padded by half
    /// of it (default: 24).
    pub spacing: i32,
    /// Fraction of the cell width removed from each side of the hit area
    /// (default: 0.2).
    pub hit_area_padding_ratio: f32,
    /// Indicator arrow height relative to the cell radius (default: 0.2).
    pub indicator_size_ratio: f32,
    /// Line rendering style (default: common).
    pub line_style: LineStyle,
    /// Return to idle automatically after a finished pattern (default: true).
    pub auto_reset: bool,
    /// Delay before auto-reset after success (default: 400ms).
    #[cfg_attr(feature = "serde", serde(with = "duration_ms", rename = "success_duration_ms"))]
    pub success_duration: Duration,
    /// Delay before auto-reset after error (default: 400ms).
    #[cfg_attr(feature = "serde", serde(with = "duration_ms", rename = "error_duration_ms"))]
    pub error_duration: Duration,
    /// Hide every visual trace of the pattern (default: false).
    pub secure_mode: bool,
}

impl Default for PatternLockConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            spacing: DEFAULT_SPACING,
            hit_area_padding_ratio: DEFAULT_HIT_AREA_PADDING_RATIO,
            indicator_size_ratio: DEFAULT_INDICATOR_SIZE_RATIO,
            line_style: LineStyle::Common,
            auto_reset: true,
            success_duration: DEFAULT_SUCCESS_DURATION,
            error_duration: DEFAULT_ERROR_DURATION,
            secure_mode: false,
        }
    }
}

impl PatternLockConfig {
    /// Set the grid dimensions.
    #[must_use]
    pub fn grid(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the dot spacing.
    #[must_use]
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the hit-area padding ratio.
    #[must_use]
    pub fn hit_area_padding_ratio(mut self, ratio: f32) -> Self {
        self.hit_area_padding_ratio = ratio;
        self
    }

    /// Set the indicator size ratio.
    #[must_use]
    pub fn indicator_size_ratio(mut self, ratio: f32) -> Self {
        self.indicator_size_ratio = ratio;
        self
    }

    /// Set the line style.
    #[must_use]
    pub fn line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    /// Enable or disable auto-reset.
    #[must_use]
    pub fn auto_reset(mut self, enabled: bool) -> Self {
        self.auto_reset = enabled;
        self
    }

    /// Set the success display duration.
    #[must_use]
    pub fn success_duration(mut self, duration: Duration) -> Self {
        self.success_duration = duration;
        self
    }

    /// Set the error display duration.
    #[must_use]
    pub fn error_duration(mut self, duration: Duration) -> Self {
        self.error_duration = duration;
        self
    }

    /// Start in secure mode.
    #[must_use]
    pub fn secure_mode(mut self, enabled: bool) -> Self {
        self.secure_mode = enabled;
        self
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Check every value against its supported range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.spacing < 0 {
            return Err(ConfigError::NegativeSpacing(self.spacing));
        }
        check_ratio("hit_area_padding_ratio", self.hit_area_padding_ratio, 0.5)?;
        check_ratio("indicator_size_ratio", self.indicator_size_ratio, 1.0)?;
        Ok(())
    }
}

fn check_ratio(field: &'static str, value: f32, max: f32) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RatioOutOfRange { field, value, max })
    }
}

/// Durations as integer milliseconds in configuration files.
#[cfg(feature = "serde")]
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use web_time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
