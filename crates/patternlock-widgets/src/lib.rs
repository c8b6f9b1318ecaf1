#![forbid(unsafe_code)]

//! Pattern lock widget: grid layout, gesture tracking, and rendering.
//!
//! # Role in patternlock
//! `patternlock-widgets` owns all session state. [`PatternLockState`] lays the
//! cells out, turns pointer events into an ordered selection, asks the host's
//! validator, and schedules the auto-reset. [`PatternLock`] is the stateless
//! view: it reads the state and paints it onto any [`Canvas`].
//!
//! # How it fits in the system
//! Geometry, pointer events, and colors come from `patternlock-core`. Hosts
//! drive the state from their event loop and call [`StatefulWidget::render`]
//! whenever they redraw.

pub mod callbacks;
pub mod canvas;
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod path;
pub mod render;
pub mod style;
pub mod timer;
pub mod tracker;

use patternlock_core::geometry::Rect;

pub use callbacks::{PatternCallbacks, ValidatorOutcome};
pub use canvas::{Canvas, DrawList, DrawOp};
pub use cell::{Cell, CellState};
pub use config::{LineStyle, PatternLockConfig};
pub use error::ConfigError;
pub use grid::Grid;
pub use path::{LinePath, LineTone};
pub use render::PatternLock;
pub use style::{CellStyle, PatternStyle};
pub use timer::{ResetTimer, TimerToken};
pub use tracker::{PatternLockState, PatternVerdict, SessionPhase};

/// A `StatefulWidget` renders from state it does not own.
///
/// The state is only borrowed: rendering never changes a session.
pub trait StatefulWidget {
    type State;
    /// Render the widget onto the canvas within `area`.
    fn render(&self, area: Rect, canvas: &mut dyn Canvas, state: &Self::State);
}
