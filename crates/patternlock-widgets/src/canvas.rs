#![forbid(unsafe_code)]

//! Drawing surface abstraction.
//!
//! The widget renderer only needs three primitives. Hosts implement
//! [`Canvas`] over their own graphics backend; [`DrawList`] records the calls
//! so that tests and offline tools can inspect or re-emit a frame.

use patternlock_core::color::Rgba;
use patternlock_core::geometry::{Point, Segment, Triangle};

/// A surface the pattern lock widget can paint on.
pub trait Canvas {
    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Stroke a straight line with round caps.
    fn stroke_line(&mut self, segment: Segment, width: f32, color: Rgba);

    /// Fill a triangle.
    fn fill_triangle(&mut self, triangle: Triangle, color: Rgba);
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Circle {
        center: Point,
        radius: f32,
        color: Rgba,
    },
    Line {
        segment: Segment,
        width: f32,
        color: Rgba,
    },
    Triangle {
        triangle: Triangle,
        color: Rgba,
    },
}

/// A [`Canvas`] that records every call in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in paint order.
    #[inline]
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of recorded operations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether nothing was drawn.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drop every recorded operation, keeping the allocation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Recorded lines.
    pub fn lines(&self) -> impl Iterator<Item = (&Segment, Rgba)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { segment, color, .. } => Some((segment, *color)),
            _ => None,
        })
    }

    /// Recorded triangles.
    pub fn triangles(&self) -> impl Iterator<Item = (&Triangle, Rgba)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Triangle { triangle, color } => Some((triangle, *color)),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, segment: Segment, width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line {
            segment,
            width,
            color,
        });
    }

    fn fill_triangle(&mut self, triangle: Triangle, color: Rgba) {
        self.ops.push(DrawOp::Triangle { triangle, color });
    }
}
