//! Deferred work in virtual time.
//!
//! The game never blocks. Every delay (mismatch hold, peek, timer tick) is a
//! [`ScheduledEvent`] in a [`Scheduler`], tagged with the session that
//! created it. The host advances virtual time and the game handles whatever
//! falls due.
//!
//! ## Cancellation
//!
//! - Individual events by [`EventId`] (the tick timer uses this on stop)
//! - Every event of a superseded session via [`Scheduler::cancel_stale`]
//!
//! A handler must still compare the event's session with the current one:
//! cancellation keeps the queue small, the session check is what makes a
//! stray event harmless.

mod scheduler;
mod timer;

pub use scheduler::{Deferred, EventId, ScheduledEvent, Scheduler};
pub use timer::GameTimer;
