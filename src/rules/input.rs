//! Inputs a host feeds into a game.

use serde::{Deserialize, Serialize};

use crate::core::CardUid;

/// A user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A card was clicked.
    SelectCard(CardUid),
    /// Restart, or "play again" from the finish notification.
    Restart,
    /// Use the one-time peek.
    Peek,
    /// Close the finish notification.
    DismissFinish,
}
