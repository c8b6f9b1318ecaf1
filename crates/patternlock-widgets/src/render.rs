#![forbid(unsafe_code)]

//! Stateless pattern lock renderer.
//!
//! [`PatternLock`] reads a [`PatternLockState`] and paints it; it never
//! mutates the session. Paint order: per cell the optional background, the
//! dot and (in indicator style) the arrow, then the connecting line and the
//! live rubber band on top.

use patternlock_core::geometry::{Point, Rect, Segment, Triangle};

use crate::StatefulWidget;
use crate::canvas::Canvas;
use crate::cell::{Cell, CellState};
use crate::config::LineStyle;
use crate::path::LineTone;
use crate::style::PatternStyle;
use crate::tracker::PatternLockState;

/// Renders a pattern lock with a borrowed style.
#[derive(Debug, Clone, Copy)]
pub struct PatternLock<'a> {
    style: &'a PatternStyle,
}

impl<'a> PatternLock<'a> {
    #[must_use]
    pub const fn new(style: &'a PatternStyle) -> Self {
        Self { style }
    }

    /// The style used for painting.
    #[must_use]
    pub const fn style(&self) -> &'a PatternStyle {
        self.style
    }

    fn render_cell(&self, cell: &Cell, origin: Point, indicator_ratio: f32, canvas: &mut dyn Canvas) {
        let style = self.style.cell(cell.state());
        let center = offset(cell.center(), origin);
        let radius = cell.radius();

        if let Some(background) = style.background {
            canvas.fill_circle(center, radius, background);
        }
        canvas.fill_circle(center, radius * style.dot_radius_ratio, style.dot_color);

        if !matches!(cell.state(), CellState::Selected | CellState::Error) {
            return;
        }
        let Some(degree) = cell.indicator_degree() else {
            return;
        };
        let arrow = self.indicator_arrow(cell, origin, indicator_ratio);
        canvas.fill_triangle(
            arrow.rotated(center, degree),
            self.style.indicator_color(cell.state()),
        );
    }

    /// Upward-pointing arrow between the top of the cell circle and the dot.
    fn indicator_arrow(&self, cell: &Cell, origin: Point, indicator_ratio: f32) -> Triangle {
        let radius = cell.radius();
        let center = offset(cell.center(), origin);
        let height = radius * indicator_ratio;
        let top = (cell.bounds().top() + cell.padding().top) as f32 + origin.y;
        let apex_y = top + radius * (1.0 - self.style.selected.dot_radius_ratio - indicator_ratio) / 2.0;
        Triangle::new(
            Point::new(center.x, apex_y),
            Point::new(center.x - height, apex_y + height),
            Point::new(center.x + height, apex_y + height),
        )
    }
}

impl StatefulWidget for PatternLock<'_> {
    type State = PatternLockState;

    fn render(&self, area: Rect, canvas: &mut dyn Canvas, state: &Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "patternlock.render",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        let origin = Point::new(area.x as f32, area.y as f32);
        let config = state.config();
        let indicator_ratio = match config.line_style {
            LineStyle::Indicator => config.indicator_size_ratio,
            LineStyle::Common => 0.0,
        };

        for cell in state.cells() {
            self.render_cell(cell, origin, indicator_ratio, canvas);
        }

        if state.is_secure() {
            return;
        }
        let path = state.line_path();
        let color = self.style.line_color(path.tone());
        for segment in path.segments() {
            canvas.stroke_line(shift(*segment, origin), self.style.line_width, color);
        }
        if let Some(band) = state.rubber_band() {
            canvas.stroke_line(
                shift(band, origin),
                self.style.line_width,
                self.style.line_color(LineTone::Regular),
            );
        }
    }
}

fn offset(point: Point, origin: Point) -> Point {
    Point::new(point.x + origin.x, point.y + origin.y)
}

fn shift(segment: Segment, origin: Point) -> Segment {
    Segment::new(offset(segment.start, origin), offset(segment.end, origin))
}
