#![forbid(unsafe_code)]

//! Colors and dot sizes for the stateless renderer.
//!
//! Style never influences the gesture state machine. Changing it between two
//! renders only changes what the next render paints.

use patternlock_core::color::Rgba;

use crate::cell::CellState;
use crate::path::LineTone;

/// Dot radius relative to the cell radius (default for every state).
pub const DEFAULT_DOT_RADIUS_RATIO: f32 = 0.3;
/// Default stroke width of the connecting line.
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Default dot color for untouched cells.
pub const REGULAR_COLOR: Rgba = Rgba::rgb(0x9e, 0x9e, 0x9e);
/// Default dot and line color for selected and successful patterns.
pub const SELECTED_COLOR: Rgba = Rgba::rgb(0x21, 0x96, 0xf3);
/// Default dot and line color for rejected patterns.
pub const ERROR_COLOR: Rgba = Rgba::rgb(0xf4, 0x43, 0x36);

/// Appearance of one cell in one state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStyle {
    /// Optional filled circle behind the dot, at the full cell radius.
    pub background: Option<Rgba>,
    /// Dot fill color.
    pub dot_color: Rgba,
    /// Dot radius relative to the cell radius.
    pub dot_radius_ratio: f32,
}

impl CellStyle {
    /// A dot of the given color with the default radius and no background.
    #[must_use]
    pub const fn dot(color: Rgba) -> Self {
        Self {
            background: None,
            dot_color: color,
            dot_radius_ratio: DEFAULT_DOT_RADIUS_RATIO,
        }
    }

    /// Set the background fill.
    #[must_use]
    pub const fn background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the dot radius ratio.
    #[must_use]
    pub const fn dot_radius_ratio(mut self, ratio: f32) -> Self {
        self.dot_radius_ratio = ratio;
        self
    }
}

/// Complete widget appearance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatternStyle {
    pub regular: CellStyle,
    pub selected: CellStyle,
    pub error: CellStyle,
    pub success: CellStyle,
    /// Stroke width of connecting lines.
    pub line_width: f32,
    pub regular_line_color: Rgba,
    pub error_line_color: Rgba,
    pub success_line_color: Rgba,
}

impl Default for PatternStyle {
    fn default() -> Self {
        Self {
            regular: CellStyle::dot(REGULAR_COLOR),
            selected: CellStyle::dot(SELECTED_COLOR),
            error: CellStyle::dot(ERROR_COLOR),
            success: CellStyle::dot(SELECTED_COLOR),
            line_width: DEFAULT_LINE_WIDTH,
            regular_line_color: SELECTED_COLOR,
            error_line_color: ERROR_COLOR,
            success_line_color: SELECTED_COLOR,
        }
    }
}

impl PatternStyle {
    /// Style for a cell state.
    #[must_use]
    pub const fn cell(&self, state: CellState) -> &CellStyle {
        match state {
            CellState::Regular => &self.regular,
            CellState::Selected => &self.selected,
            CellState::Error => &self.error,
            CellState::Success => &self.success,
        }
    }

    /// Line color for a path tone.
    #[must_use]
    pub const fn line_color(&self, tone: LineTone) -> Rgba {
        match tone {
            LineTone::Regular => self.regular_line_color,
            LineTone::Success => self.success_line_color,
            LineTone::Error => self.error_line_color,
        }
    }

    /// Color of a cell's indicator arrow: the line color matching its state.
    #[must_use]
    pub const fn indicator_color(&self, state: CellState) -> Rgba {
        match state {
            CellState::Regular | CellState::Selected => self.regular_line_color,
            CellState::Success => self.success_line_color,
            CellState::Error => self.error_line_color,
        }
    }

    /// Set the line color used after a successful pattern.
    pub fn set_success_line_color(&mut self, color: Rgba) {
        self.success_line_color = color;
    }

    /// Set the dot color used after a successful pattern.
    pub fn set_success_dot_color(&mut self, color: Rgba) {
        self.success.dot_color = color;
    }

    /// Set the line color used after a rejected pattern.
    pub fn set_error_line_color(&mut self, color: Rgba) {
        self.error_line_color = color;
    }

    /// Set the dot color used after a rejected pattern.
    pub fn set_error_dot_color(&mut self, color: Rgba) {
        self.error.dot_color = color;
    }

    /// Set the line stroke width.
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }
}
