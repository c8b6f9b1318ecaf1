#![forbid(unsafe_code)]

//! A single selectable node of the pattern grid.
//!
//! [`Cell`] is a plain data record: its index, its bounds from the last
//! layout pass, its visual [`CellState`], and the optional direction of its
//! indicator arrow. Center and radius are always derived from the bounds.

use patternlock_core::geometry::{Point, Rect, Sides};

/// Visual state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellState {
    /// Untouched.
    #[default]
    Regular,
    /// Part of the in-progress pattern.
    Selected,
    /// Part of a pattern the validator rejected.
    Error,
    /// Part of a pattern the validator accepted.
    Success,
}

/// One grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    index: usize,
    bounds: Rect,
    padding: Sides,
    state: CellState,
    indicator_degree: Option<f32>,
}

impl Cell {
    /// Create a regular cell with the given row-major index and layout.
    #[must_use]
    pub fn new(index: usize, bounds: Rect, padding: Sides) -> Self {
        Self {
            index,
            bounds,
            padding,
            state: CellState::Regular,
            indicator_degree: None,
        }
    }

    /// 0-based row-major index.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// 1-based id reported to hosts and validators.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> usize {
        self.index + 1
    }

    /// Bounds in container coordinates.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Inner padding applied on each side of the bounds.
    #[inline]
    #[must_use]
    pub const fn padding(&self) -> Sides {
        self.padding
    }

    /// Center of the bounds.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Radius of the cell circle: half the shorter side minus horizontal
    /// padding, truncated to whole pixels.
    #[must_use]
    pub fn radius(&self) -> f32 {
        ((self.bounds.min_side() - self.padding.horizontal_sum()) / 2).max(0) as f32
    }

    /// Current visual state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Direction of the indicator arrow, if one should be drawn.
    #[inline]
    #[must_use]
    pub const fn indicator_degree(&self) -> Option<f32> {
        self.indicator_degree
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) fn set_indicator_degree(&mut self, degree: f32) {
        self.indicator_degree = Some(degree);
    }

    /// Back to `Regular` with no indicator.
    pub(crate) fn reset(&mut self) {
        self.state = CellState::Regular;
        self.indicator_degree = None;
    }
}
