//! Game state for one session.
//!
//! ## GameState
//!
//! The single owned value the rules mutate:
//! - The deck and the current flip set
//! - Match, move and elapsed-second counters
//! - Flags for started, input lock, peek availability and an active peek
//!
//! `GameState` is cheap to clone (the deck is backed by `im`), so hosts can
//! keep snapshots for undo-free replays or rendering diffs.
//!
//! ## TurnPhase
//!
//! The turn state machine is not stored separately; [`GameState::phase`]
//! derives it from the counters and flags so the two can never disagree.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::{CardUid, SessionId};
use crate::cards::{Card, Deck};

/// Where the turn state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card face up awaiting a partner.
    Idle,
    /// One face-up card awaiting a second pick.
    OneFlipped,
    /// Two cards face up, input locked until they resolve.
    Evaluating,
    /// A peek is on screen, input locked.
    Peeking,
    /// Every pair has been found.
    Finished,
}

/// Owned state of a single game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Session this state belongs to.
    pub session: SessionId,

    /// Cards in grid order.
    pub deck: Deck,

    /// Grid positions of face-up unmatched cards, in flip order (0-2).
    pub flipped: SmallVec<[usize; 2]>,

    /// Pairs found.
    pub matches: usize,

    /// Completed two-card evaluations.
    pub moves: u32,

    /// Seconds on the game clock.
    pub seconds: u32,

    /// A card has been selected this session.
    pub started: bool,

    /// Selections and peeks are refused.
    pub locked: bool,

    /// The one-time peek has not been used.
    pub peek_available: bool,

    /// A peek overlay is currently shown.
    pub peeking: bool,
}

impl GameState {
    /// Fresh state around a newly dealt deck.
    #[must_use]
    pub fn new(session: SessionId, deck: Deck) -> Self {
        Self {
            session,
            deck,
            flipped: SmallVec::new(),
            matches: 0,
            moves: 0,
            seconds: 0,
            started: false,
            locked: false,
            peek_available: true,
            peeking: false,
        }
    }

    /// Pairs needed to win.
    #[must_use]
    pub fn pair_target(&self) -> usize {
        self.deck.pair_count()
    }

    /// Every pair has been found.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.deck.is_empty() && self.matches == self.pair_target()
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.is_finished() {
            TurnPhase::Finished
        } else if self.peeking {
            TurnPhase::Peeking
        } else {
            match self.flipped.len() {
                0 => TurnPhase::Idle,
                1 => TurnPhase::OneFlipped,
                _ => TurnPhase::Evaluating,
            }
        }
    }

    /// Card by uid.
    #[must_use]
    pub fn card(&self, uid: CardUid) -> Option<&Card> {
        self.deck.card(uid)
    }

    /// Whether a peek could start right now.
    #[must_use]
    pub fn can_peek(&self) -> bool {
        self.peek_available && !self.locked && self.flipped.is_empty() && !self.is_finished()
    }
}
