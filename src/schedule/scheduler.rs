//! Virtual-time event queue.
//!
//! Events are ordered by due time, then by the order they were scheduled.
//! Time only moves forward, and only when the owner pops or advances.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardUid, SessionId};

/// Identifier of a scheduled event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

/// Work the game has deferred.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// Add one second to the game clock.
    Tick,

    /// Turn a mismatched pair back face down.
    MismatchRevert { pair: [CardUid; 2] },

    /// Drop the peek overlay from these cards.
    PeekRevert { cards: Vec<CardUid> },
}

/// A deferred event with its due time and owning session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: EventId,
    pub due_ms: u64,
    pub session: SessionId,
    pub event: Deferred,
}

/// Queue of deferred events over a virtual clock (milliseconds).
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    queue: BTreeMap<(u64, EventId), ScheduledEvent>,
    due_by_id: FxHashMap<EventId, u64>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Schedule `event` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, session: SessionId, event: Deferred) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;

        let due_ms = self.now_ms.saturating_add(delay_ms);
        self.queue.insert(
            (due_ms, id),
            ScheduledEvent {
                id,
                due_ms,
                session,
                event,
            },
        );
        self.due_by_id.insert(id, due_ms);
        id
    }

    /// Cancel a pending event.
    ///
    /// Returns true if the event was still pending.
    pub fn cancel(&mut self, id: EventId) -> bool {
        match self.due_by_id.remove(&id) {
            Some(due_ms) => self.queue.remove(&(due_ms, id)).is_some(),
            None => false,
        }
    }

    /// Cancel every event not owned by `current`.
    ///
    /// Returns the number of events dropped.
    pub fn cancel_stale(&mut self, current: SessionId) -> usize {
        let stale: Vec<(u64, EventId)> = self
            .queue
            .iter()
            .filter(|(_, scheduled)| scheduled.session != current)
            .map(|(key, _)| *key)
            .collect();

        for key in &stale {
            self.queue.remove(key);
            self.due_by_id.remove(&key.1);
        }
        stale.len()
    }

    /// Check if an event is still pending.
    #[must_use]
    pub fn is_pending(&self, id: EventId) -> bool {
        self.due_by_id.contains_key(&id)
    }

    /// Due time of the earliest pending event.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due_ms, _)| *due_ms)
    }

    /// Remove the earliest event due at or before `until_ms`, moving the
    /// clock to its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<ScheduledEvent> {
        let key = *self.queue.keys().next()?;
        if key.0 > until_ms {
            return None;
        }

        let scheduled = self.queue.remove(&key)?;
        self.due_by_id.remove(&scheduled.id);
        self.now_ms = self.now_ms.max(scheduled.due_ms);
        Some(scheduled)
    }

    /// Move the clock forward to `to_ms` without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn advance_clock(&mut self, to_ms: u64) {
        self.now_ms = self.now_ms.max(to_ms);
    }
}
