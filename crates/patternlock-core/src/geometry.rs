#![forbid(unsafe_code)]

//! Geometric primitives and the vector math behind hit-testing and lines.
//!
//! Rectangles use integer container coordinates (origin top-left, y grows
//! downward) because cell bounds come from integer layout. Points are `f32`
//! because pointer input is continuous.

/// A rectangle for cell bounds and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Length of the shorter side.
    #[inline]
    pub const fn min_side(&self) -> i32 {
        if self.width < self.height {
            self.width
        } else {
            self.height
        }
    }

    /// Center point, rounded down to whole pixels.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.x + self.width / 2) as f32,
            (self.y + self.height / 2) as f32,
        )
    }

    /// Check whether a point lies inside the rectangle shrunk by `inset` on
    /// every side. Edges are inclusive.
    #[inline]
    pub fn contains_inset(&self, point: Point, inset: f32) -> bool {
        point.x >= self.left() as f32 + inset
            && point.x <= self.right() as f32 - inset
            && point.y >= self.top() as f32 + inset
            && point.y <= self.bottom() as f32 - inset
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: i32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> i32 {
        self.left + self.right
    }
}

/// A point in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        distance(other.x - self.x, other.y - self.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[inline]
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance_to(self.end)
    }

    /// The segment between two circles of equal `radius`, clipped so it
    /// starts and ends on the circle boundaries instead of the centers.
    #[must_use]
    pub fn between_circles(from: Point, to: Point, radius: f32) -> Self {
        Self {
            start: clip_point_toward(from, radius, to),
            end: clip_point_toward(to, radius, from),
        }
    }
}

/// A filled triangle, used for indicator arrow glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub points: [Point; 3],
}

impl Triangle {
    /// Create a new triangle.
    #[inline]
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { points: [a, b, c] }
    }

    /// Rotate every vertex clockwise (screen coordinates) by `degrees`
    /// around `pivot`.
    #[must_use]
    pub fn rotated(self, pivot: Point, degrees: f32) -> Self {
        let [a, b, c] = self.points;
        Self::new(
            rotate_about(a, pivot, degrees),
            rotate_about(b, pivot, degrees),
            rotate_about(c, pivot, degrees),
        )
    }
}

// ---------------------------------------------------------------------------
// Vector math
// ---------------------------------------------------------------------------

/// Euclidean norm of `(dx, dy)`.
#[inline]
#[must_use]
pub fn distance(dx: f32, dy: f32) -> f32 {
    dx.hypot(dy)
}

/// Direction of `(dx, dy)` in degrees, offset so that 0° points up.
///
/// With y growing downward this gives 90° for "right", 180° for "down" and
/// 270° for "left". The result is normalized to `[0, 360)`.
#[inline]
#[must_use]
pub fn angle_degrees(dx: f32, dy: f32) -> f32 {
    let degrees = dy.atan2(dx).to_degrees() + 90.0;
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Point on the circle of `radius` around `center`, in the direction of
/// `target`.
///
/// A zero-length (or non-finite) direction returns `center` unchanged.
#[must_use]
pub fn clip_point_toward(center: Point, radius: f32, target: Point) -> Point {
    let dx = target.x - center.x;
    let dy = target.y - center.y;
    let length = distance(dx, dy);
    if length == 0.0 || !length.is_finite() {
        return center;
    }
    Point::new(
        center.x + radius * dx / length,
        center.y + radius * dy / length,
    )
}

/// Rotate `point` clockwise (screen coordinates) by `degrees` around `pivot`.
#[must_use]
pub fn rotate_about(point: Point, pivot: Point, degrees: f32) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}
