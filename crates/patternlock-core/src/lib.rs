#![forbid(unsafe_code)]

//! Core: geometry, pointer events, colors, and logging for patternlock.
//!
//! # Role in patternlock
//! `patternlock-core` is the leaf layer. It owns the coordinate types and the
//! vector math used to hit-test cells and build connecting lines, the
//! canonical pointer event that hosts feed into the gesture tracker, and the
//! packed color type shared by the style layer and every canvas backend.
//!
//! # How it fits in the system
//! `patternlock-widgets` consumes these types to run the gesture state
//! machine and to paint the widget. Nothing here holds state between calls.

pub mod color;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, warn};
