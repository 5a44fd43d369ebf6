//! Deck construction and lookup.
//!
//! ## Building
//!
//! [`build_deck`] picks `N` distinct icons from the pool with a partial
//! Fisher-Yates pass, doubles them, shuffles the `2N` entries with a full
//! Fisher-Yates pass and assigns each card a fresh uid.
//!
//! ## Ordering
//!
//! Positions are fixed once the deck is built. Nothing reorders a `Deck`;
//! the render collaborator can rely on a card staying in its grid slot.
//!
//! ```
//! use memory_lab::cards::build_deck;
//! use memory_lab::core::GameRng;
//!
//! let pool = ["A", "B", "C", "D"];
//! let mut rng = GameRng::new(7);
//! let deck = build_deck(&pool, 3, &mut rng);
//!
//! assert_eq!(deck.len(), 6);
//! for card in deck.iter() {
//!     assert_eq!(deck.iter().filter(|c| c.icon == card.icon).count(), 2);
//! }
//! ```

use im::{HashMap as ImHashMap, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{CardUid, GameRng};

/// Ordered cards of one game, indexed by uid.
///
/// Backed by `im` structures so snapshots of the game state are O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
    positions: ImHashMap<CardUid, usize>,
}

impl Deck {
    /// Create a deck from cards in their final order.
    ///
    /// Uids must be distinct; a repeated uid resolves to its last position.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let positions = cards
            .iter()
            .enumerate()
            .map(|(index, card)| (card.uid, index))
            .collect();
        Self {
            cards: cards.into_iter().collect(),
            positions,
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Grid position of a card.
    #[must_use]
    pub fn position(&self, uid: CardUid) -> Option<usize> {
        self.positions.get(&uid).copied()
    }

    /// Card at a grid position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Mutable card at a grid position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Card by uid.
    #[must_use]
    pub fn card(&self, uid: CardUid) -> Option<&Card> {
        self.position(uid).and_then(|index| self.cards.get(index))
    }

    /// Mutable card by uid.
    pub fn card_mut(&mut self, uid: CardUid) -> Option<&mut Card> {
        let index = self.position(uid)?;
        self.cards.get_mut(index)
    }

    /// Cards in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Uids of cards not yet matched, in grid order.
    #[must_use]
    pub fn unmatched(&self) -> Vec<CardUid> {
        self.cards.iter().filter(|card| !card.matched).map(|card| card.uid).collect()
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count()
    }
}

/// Deal a fresh deck of `pairs` pairs drawn from `pool`.
///
/// The caller guarantees `pool` holds at least `pairs` distinct icons;
/// `GameConfig::validate` checks this before any deal.
pub fn build_deck<S: AsRef<str>>(pool: &[S], pairs: usize, rng: &mut GameRng) -> Deck {
    let mut icons: Vec<&str> = pool.iter().map(AsRef::as_ref).collect();
    let chosen = rng.partial_shuffle(&mut icons, pairs).to_vec();

    let mut faces: Vec<&str> = chosen.iter().chain(chosen.iter()).copied().collect();
    rng.shuffle(&mut faces);

    let mut used = FxHashSet::default();
    let cards = faces
        .into_iter()
        .map(|icon| {
            let uid = loop {
                let candidate = CardUid::new(rng.gen_u64());
                if used.insert(candidate) {
                    break candidate;
                }
            };
            Card::new(uid, icon)
        })
        .collect();

    Deck::from_cards(cards)
}
