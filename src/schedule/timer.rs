//! The game clock's tick timer.
//!
//! Starts once per session on the first selection and keeps exactly one
//! `Tick` pending until stopped. There is no pause.

use super::scheduler::{Deferred, EventId, Scheduler};
use crate::core::SessionId;

/// Recurring one-second tick built on the scheduler.
#[derive(Clone, Debug)]
pub struct GameTimer {
    interval_ms: u64,
    pending: Option<EventId>,
}

impl GameTimer {
    /// Create a stopped timer.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            pending: None,
        }
    }

    /// Check if the timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Start ticking for `session`.
    ///
    /// Returns false if the timer was already running.
    pub fn start(&mut self, scheduler: &mut Scheduler, session: SessionId) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(scheduler.schedule(self.interval_ms, session, Deferred::Tick));
        true
    }

    /// Stop ticking and cancel the pending tick.
    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }

    /// Acknowledge a fired tick and schedule the next one.
    ///
    /// Returns false, without rescheduling, if `fired` is not the tick this
    /// timer is waiting on.
    pub fn on_tick(&mut self, scheduler: &mut Scheduler, fired: EventId, session: SessionId) -> bool {
        if self.pending != Some(fired) {
            return false;
        }
        self.pending = Some(scheduler.schedule(self.interval_ms, session, Deferred::Tick));
        true
    }
}
