//! Identifiers for cards and game sessions.
//!
//! ## CardUid
//!
//! Every card dealt gets a random 64-bit identifier. Identifiers are unique
//! within a deck (the deck builder re-rolls on collision) and collide across
//! games only with negligible probability.
//!
//! ## SessionId
//!
//! A monotonically increasing counter bumped on every reset. Deferred events
//! carry the session that scheduled them, so anything that fires after a
//! reset can be recognised as stale.
//!
//! ```
//! use memory_lab::core::SessionId;
//!
//! let first = SessionId::default();
//! let second = first.next();
//! assert_ne!(first, second);
//! assert!(second > first);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardUid(pub u64);

impl CardUid {
    /// Create a card uid from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for CardUid {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{:016x}", self.0)
    }
}

/// Identity of one game session (one deal, from reset to reset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// The session that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Get the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}
