#![forbid(unsafe_code)]

//! Structured logging for the gesture tracker.
//!
//! The tracker reports its lifecycle through two levels: `debug!` for
//! session transitions (`patternlock.session_start`,
//! `patternlock.cell_selected`, `patternlock.complete`, `patternlock.reset`,
//! `patternlock.timer_fired`) and `warn!` for a validator that panicked.
//! Every event carries a `message` field naming it.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it they
//! expand to nothing, so field expressions are never evaluated and the
//! tracker carries no logging cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Session transition event; compiled out without `tracing`.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Recoverable fault event; compiled out without `tracing`.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
