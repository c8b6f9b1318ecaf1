#![forbid(unsafe_code)]

//! Cancellable one-shot timer for auto-reset.
//!
//! The tracker never sleeps or spawns. A scheduled reset is just a deadline
//! plus a generation number:
//!
//! - Polling hosts call [`PatternLockState::tick`] on every frame or read
//!   [`ResetTimer::deadline`] to arm their own wake-up.
//! - Hosts with a "run after delay" primitive keep the returned
//!   [`TimerToken`] and hand it back to [`PatternLockState::fire_timer`] when
//!   their callback runs.
//!
//! Either way, [`ResetTimer::cancel`] bumps the generation, so a token or
//! deadline issued for an older session can never reset a newer one.
//!
//! [`PatternLockState::tick`]: crate::tracker::PatternLockState::tick
//! [`PatternLockState::fire_timer`]: crate::tracker::PatternLockState::fire_timer

use web_time::{Duration, Instant};

/// Identifies one scheduled firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    /// `None` when the delay overflows the clock; only the token can fire it.
    deadline: Option<Instant>,
    token: TimerToken,
}

/// A single-slot cancellable timer. Scheduling replaces any pending firing.
#[derive(Debug, Clone, Default)]
pub struct ResetTimer {
    generation: u64,
    pending: Option<Pending>,
}

impl ResetTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a firing `delay` after `now`, replacing any pending one.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.pending = Some(Pending {
            deadline: now.checked_add(delay),
            token,
        });
        token
    }

    /// Invalidate the pending firing and every token issued so far.
    ///
    /// Returns `true` if a firing was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take().is_some()
    }

    /// Deadline of the pending firing.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.and_then(|p| p.deadline)
    }

    /// Token of the pending firing.
    #[inline]
    #[must_use]
    pub fn pending_token(&self) -> Option<TimerToken> {
        self.pending.map(|p| p.token)
    }

    /// Whether a firing is pending.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending firing if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<TimerToken> {
        let pending = self.pending?;
        if pending.deadline.is_none_or(|deadline| now < deadline) {
            return None;
        }
        self.pending = None;
        Some(pending.token)
    }

    /// Consume the pending firing if `token` identifies it, regardless of the
    /// deadline. Stale tokens are ignored.
    pub fn take(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}
