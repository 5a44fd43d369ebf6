//! Cards and their render view.
//!
//! A `Card` is created by the deck builder and lives until the next reset.
//! Its `uid` and `icon` never change; `revealed` and `matched` are the only
//! fields the rules touch.
//!
//! `CardView` is what the render collaborator sees. It folds the logical
//! fields together with the transient peek overlay, which is never stored on
//! the card itself.

use serde::{Deserialize, Serialize};

use crate::core::CardUid;

/// A dealt card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the deal.
    pub uid: CardUid,

    /// Icon shown on the face. Exactly one other card shares it.
    pub icon: String,

    /// Part of a found pair. Never cleared once set.
    pub matched: bool,

    /// Face up as part of the current flip set.
    pub revealed: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(uid: CardUid, icon: impl Into<String>) -> Self {
        Self {
            uid,
            icon: icon.into(),
            matched: false,
            revealed: false,
        }
    }

    /// Whether a selection of this card can be accepted.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.matched && !self.revealed
    }

    /// Whether the face should be shown from logical state alone.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }

    /// Whether both cards carry the same icon.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.uid != other.uid && self.icon == other.icon
    }
}

/// Display state of a single card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Card being described.
    pub uid: CardUid,

    /// Face icon.
    pub icon: String,

    /// Draw face up.
    pub face_up: bool,

    /// Draw with the matched styling.
    pub matched: bool,

    /// Face up only because of a peek.
    pub peek: bool,
}

impl CardView {
    /// View derived from logical state only.
    #[must_use]
    pub fn of(card: &Card) -> Self {
        Self {
            uid: card.uid,
            icon: card.icon.clone(),
            face_up: card.is_face_up(),
            matched: card.matched,
            peek: false,
        }
    }

    /// View of a card under the peek overlay. Matched cards keep their normal
    /// view.
    #[must_use]
    pub fn peeked(card: &Card) -> Self {
        if card.matched {
            return Self::of(card);
        }
        Self {
            face_up: true,
            peek: true,
            ..Self::of(card)
        }
    }

    /// Accessible label for the card.
    #[must_use]
    pub fn label(&self) -> String {
        if self.face_up {
            format!("Card {}", self.icon)
        } else {
            "Hidden card".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_hidden() {
        let card = Card::new(CardUid::new(1), "A");

        assert!(!card.matched);
        assert!(!card.revealed);
        assert!(card.is_selectable());
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_matched_is_face_up() {
        let mut card = Card::new(CardUid::new(1), "A");
        card.matched = true;

        assert!(card.is_face_up());
        assert!(!card.is_selectable());
    }

    #[test]
    fn test_pairs_with() {
        let a1 = Card::new(CardUid::new(1), "A");
        let a2 = Card::new(CardUid::new(2), "A");
        let b = Card::new(CardUid::new(3), "B");

        assert!(a1.pairs_with(&a2));
        assert!(!a1.pairs_with(&b));
        assert!(!a1.pairs_with(&a1));
    }

    #[test]
    fn test_view_of() {
        let mut card = Card::new(CardUid::new(5), "A");
        assert!(!CardView::of(&card).face_up);

        card.revealed = true;
        let view = CardView::of(&card);
        assert!(view.face_up);
        assert!(!view.matched);
        assert!(!view.peek);
    }

    #[test]
    fn test_peeked_view() {
        let card = Card::new(CardUid::new(5), "A");
        let view = CardView::peeked(&card);

        assert!(view.face_up);
        assert!(view.peek);
        assert!(!card.revealed);
    }

    #[test]
    fn test_peeked_view_skips_matched() {
        let mut card = Card::new(CardUid::new(5), "A");
        card.matched = true;
        let view = CardView::peeked(&card);

        assert!(view.face_up);
        assert!(view.matched);
        assert!(!view.peek);
    }

    #[test]
    fn test_label() {
        let mut card = Card::new(CardUid::new(5), "A");
        assert_eq!(CardView::of(&card).label(), "Hidden card");
        card.revealed = true;
        assert_eq!(CardView::of(&card).label(), "Card A");
    }
}
