// SPDX-License-Identifier: MPL-2.0
//! Owned timer scheduler for the overlay.
//!
//! Timers are plain deadlines keyed by [`TimerKind`]. At most one instance of
//! each kind is pending: scheduling a kind again replaces its deadline, so
//! re-arming is always cancel-then-reschedule. Nothing runs by itself; the
//! host asks for [`Scheduler::next_deadline`], waits, and then pops what is
//! due one timer at a time with [`Scheduler::pop_due`], so a timer canceled
//! by an earlier callback never fires.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

// =============================================================================
// Clock
// =============================================================================

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to the overlay.
///
/// # Example
///
/// ```
/// use playback_overlay::overlay::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// let start = clock.now();
///
/// handle.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

// =============================================================================
// Scheduler
// =============================================================================

/// The timers the overlay owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKind {
    /// Auto-fade of the controls.
    FadeOut,
    /// Self-rescheduling progress refresh.
    ProgressTick,
    /// Debounced hide of the volume/brightness indicator.
    HideIndicator,
}

/// Pending deadlines, one per [`TimerKind`] at most.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: HashMap<TimerKind, Instant>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire `delay` after `now`, replacing any pending
    /// instance of the same kind. Returns the new deadline.
    pub fn schedule(&mut self, kind: TimerKind, now: Instant, delay: Duration) -> Instant {
        let deadline = now + delay;
        self.pending.insert(kind, deadline);
        deadline
    }

    /// Cancels `kind`. Returns whether it was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.pending.remove(&kind).is_some()
    }

    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.contains_key(&kind)
    }

    #[must_use]
    pub fn deadline(&self, kind: TimerKind) -> Option<Instant> {
        self.pending.get(&kind).copied()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the earliest timer due at `now`.
    ///
    /// Timers sharing a deadline come out in [`TimerKind`] order.
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerKind> {
        let (kind, _) = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .min_by_key(|(kind, deadline)| (**deadline, **kind))?;
        let kind = *kind;
        self.pending.remove(&kind);
        Some(kind)
    }
}
