#![forbid(unsafe_code)]

//! Pattern lock public facade crate.
//!
//! This crate provides the stable surface for hosts. It re-exports the
//! common types from the internal crates, offers a small prelude, and adds
//! checked constructors that report bad configuration as an [`Error`].

mod error;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use patternlock_core::color::{ParseColorError, Rgba};
pub use patternlock_core::event::{PointerEvent, PointerEventKind};
pub use patternlock_core::geometry::{Point, Rect, Segment, Triangle};

// --- Widget re-exports -----------------------------------------------------

pub use patternlock_widgets::{
    Canvas, Cell, CellState, CellStyle, ConfigError, DrawList, DrawOp, LinePath, LineStyle,
    LineTone, PatternCallbacks, PatternLock, PatternLockConfig, PatternLockState, PatternStyle,
    PatternVerdict, SessionPhase, StatefulWidget, TimerToken,
};

// --- Checked constructors --------------------------------------------------

/// Validate `config` and build a tracker laid out in `width × height`.
pub fn build_state(config: PatternLockConfig, width: i32, height: i32) -> Result<PatternLockState> {
    config.validate()?;
    Ok(PatternLockState::new(config, width, height))
}

/// Default style recolored with hex colors: `accent` for selected and
/// successful patterns, `error` for rejected ones.
pub fn themed_style(accent: &str, error: &str) -> Result<PatternStyle> {
    let accent: Rgba = accent.parse()?;
    let error: Rgba = error.parse()?;
    let mut style = PatternStyle::default();
    style.selected.dot_color = accent;
    style.regular_line_color = accent;
    style.set_success_dot_color(accent);
    style.set_success_line_color(accent);
    style.set_error_dot_color(error);
    style.set_error_line_color(error);
    Ok(style)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CellState, Error, LineStyle, PatternCallbacks, PatternLock, PatternLockConfig,
        PatternLockState, PatternStyle, PatternVerdict, PointerEvent, Result, StatefulWidget,
        build_state,
    };

    pub use crate::{core, widgets};
}

pub use patternlock_core as core;
pub use patternlock_widgets as widgets;
