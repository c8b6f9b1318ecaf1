#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The gesture tracker follows a single active pointer. Hosts translate
//! their native touch or mouse input into [`PointerEvent`] values expressed
//! in container-local coordinates.
//!
//! # Design Notes
//!
//! - Coordinates are `f32` and may be negative or outside the container;
//!   hit-testing treats such points as "no cell".
//! - `Cancel` is distinct from `Up`: it abandons the gesture without
//!   validation.

use crate::geometry::Point;

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// X coordinate in container-local pixels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: f32,

    /// Y coordinate in container-local pixels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    /// Pointer pressed at `(x, y)`.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    /// Pointer moved to `(x, y)` while pressed.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Pointer released at `(x, y)`.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    /// Gesture cancelled by the host (focus loss, parent intercept).
    #[must_use]
    pub const fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, 0.0, 0.0)
    }

    /// Get the position as a point.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerEventKind {
    /// Pointer pressed.
    Down,

    /// Pointer moved while pressed.
    Move,

    /// Pointer released.
    Up,

    /// Gesture abandoned by the host.
    Cancel,
}
