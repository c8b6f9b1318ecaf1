#![forbid(unsafe_code)]

//! Replay harness for the pattern lock widget.
//!
//! A trace is a JSON document holding a configuration (or a named preset)
//! and a list of timestamped pointer events. [`replay::replay`] drives a
//! [`PatternLockState`](patternlock_widgets::PatternLockState) through the
//! trace with a synthetic clock, renders the final frame into a
//! [`DrawList`](patternlock_widgets::DrawList), and reports what happened.
//! [`svg::to_svg`] turns the recorded frame into a standalone SVG file.

pub mod error;
pub mod presets;
pub mod replay;
pub mod svg;
pub mod trace;

pub use error::ReplayError;
pub use presets::Preset;
pub use replay::{ReplayOutcome, ReplaySummary, replay};
pub use trace::{TimedEvent, Trace};
