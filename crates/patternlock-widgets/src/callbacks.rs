#![forbid(unsafe_code)]

//! Host notification hooks.
//!
//! Every hook is optional and only invoked when present. The completion hook
//! doubles as the pattern validator: it receives the 1-based ids of the
//! selected cells and answers whether the pattern is correct.
//!
//! # Failure Modes
//!
//! Validation is fail-closed. A missing validator or one that panics yields a
//! non-accepting [`ValidatorOutcome`], which the tracker maps to the error
//! transition.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Called once per session when the first cell is hit.
pub type StartedFn = Box<dyn FnMut()>;
/// Called with the 1-based ids every time a cell is added.
pub type ProgressFn = Box<dyn FnMut(&[usize])>;
/// Called with the 1-based ids when the pointer is released; returns whether
/// the pattern is correct.
pub type CompleteFn = Box<dyn FnMut(&[usize]) -> bool>;

/// What the validator said about a finished pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorOutcome {
    /// The validator returned `true`.
    Accepted,
    /// The validator returned `false`.
    Rejected,
    /// No validator is installed.
    Missing,
    /// The validator panicked; the payload message is kept for diagnostics.
    Panicked(String),
}

impl ValidatorOutcome {
    /// Only an explicit `true` counts as correct.
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Optional host hooks.
#[derive(Default)]
pub struct PatternCallbacks {
    on_started: Option<StartedFn>,
    on_progress: Option<ProgressFn>,
    on_complete: Option<CompleteFn>,
}

impl fmt::Debug for PatternCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternCallbacks")
            .field("on_started", &self.on_started.is_some())
            .field("on_progress", &self.on_progress.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl PatternCallbacks {
    /// No hooks installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the session-start hook.
    #[must_use]
    pub fn on_started(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_started = Some(Box::new(f));
        self
    }

    /// Install the progress hook.
    #[must_use]
    pub fn on_progress(mut self, f: impl FnMut(&[usize]) + 'static) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    /// Install the validator.
    #[must_use]
    pub fn on_complete(mut self, f: impl FnMut(&[usize]) -> bool + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Whether a validator is installed.
    #[must_use]
    pub fn has_validator(&self) -> bool {
        self.on_complete.is_some()
    }

    pub(crate) fn started(&mut self) {
        if let Some(f) = self.on_started.as_mut() {
            f();
        }
    }

    pub(crate) fn progress(&mut self, ids: &[usize]) {
        if let Some(f) = self.on_progress.as_mut() {
            f(ids);
        }
    }

    pub(crate) fn complete(&mut self, ids: &[usize]) -> ValidatorOutcome {
        let Some(f) = self.on_complete.as_mut() else {
            return ValidatorOutcome::Missing;
        };
        match catch_unwind(AssertUnwindSafe(|| f(ids))) {
            Ok(true) => ValidatorOutcome::Accepted,
            Ok(false) => ValidatorOutcome::Rejected,
            Err(payload) => ValidatorOutcome::Panicked(panic_message(payload.as_ref())),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn missing_hooks_are_noops() {
        let mut callbacks = PatternCallbacks::new();
        callbacks.started();
        callbacks.progress(&[1, 2]);
        assert_eq!(callbacks.complete(&[1, 2]), ValidatorOutcome::Missing);
        assert!(!callbacks.has_validator());
    }

    #[test]
    fn hooks_receive_ids() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut callbacks = PatternCallbacks::new()
            .on_progress(move |ids| sink.borrow_mut().push(ids.to_vec()))
            .on_complete(|ids| ids == [1, 2, 3]);
        callbacks.progress(&[1]);
        callbacks.progress(&[1, 2]);
        assert_eq!(*seen.borrow(), vec![vec![1], vec![1, 2]]);
        assert_eq!(callbacks.complete(&[1, 2, 3]), ValidatorOutcome::Accepted);
        assert_eq!(callbacks.complete(&[3, 2, 1]), ValidatorOutcome::Rejected);
    }

    #[test]
    fn panicking_validator_is_not_accepted() {
        let mut callbacks = PatternCallbacks::new().on_complete(|_| panic!("store unavailable"));
        let outcome = callbacks.complete(&[1]);
        assert_eq!(
            outcome,
            ValidatorOutcome::Panicked("store unavailable".to_string())
        );
        assert!(!outcome.is_accepted());
    }
}
