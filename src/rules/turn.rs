//! Turn resolution.
//!
//! Pure transitions over [`GameState`]: a selection either is ignored,
//! reveals a first card, or completes a pair that is then evaluated. A
//! mismatch leaves the state locked until [`revert_mismatch`] runs.
//!
//! ```text
//! Idle --select--> OneFlipped --select--> Evaluating
//!   ^                                       |  match: immediate
//!   +---------------------------------------+  mismatch: after revert
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardUid, GameState, SessionId};

/// Why a selection had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ignored {
    /// Input is locked by an evaluation or a peek.
    Locked,
    /// No card with that uid in the current deck.
    UnknownCard,
    /// The card is already part of a found pair.
    AlreadyMatched,
    /// The card is already face up in the flip set.
    AlreadyRevealed,
}

/// Result of a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing changed.
    Ignored(Ignored),

    /// The card is now the only face-up card of the turn.
    FirstReveal(CardUid),

    /// The pair matched; `finished` when it was the last pair.
    Matched { pair: [CardUid; 2], finished: bool },

    /// The pair differs and stays face up, input locked, until reverted.
    Mismatch { pair: [CardUid; 2] },
}

impl Selection {
    /// The card this selection turned face up, if any.
    #[must_use]
    pub fn revealed(&self) -> Option<CardUid> {
        match self {
            Selection::Ignored(_) => None,
            Selection::FirstReveal(uid) => Some(*uid),
            Selection::Matched { pair, .. } | Selection::Mismatch { pair } => Some(pair[1]),
        }
    }

    /// Whether this selection completed a move.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Selection::Matched { .. } | Selection::Mismatch { .. })
    }
}

/// Apply a card selection.
pub fn select(state: &mut GameState, uid: CardUid) -> Selection {
    if state.locked {
        return Selection::Ignored(Ignored::Locked);
    }

    let Some(index) = state.deck.position(uid) else {
        return Selection::Ignored(Ignored::UnknownCard);
    };
    let Some(card) = state.deck.get_mut(index) else {
        return Selection::Ignored(Ignored::UnknownCard);
    };
    if card.matched {
        return Selection::Ignored(Ignored::AlreadyMatched);
    }
    if card.revealed {
        return Selection::Ignored(Ignored::AlreadyRevealed);
    }

    card.revealed = true;
    state.started = true;
    state.flipped.push(index);

    if state.flipped.len() < 2 {
        return Selection::FirstReveal(uid);
    }
    evaluate(state)
}

/// Compare the two flipped cards, in flip order.
fn evaluate(state: &mut GameState) -> Selection {
    let (first, second) = (state.flipped[0], state.flipped[1]);
    let (pair, is_match) = match (state.deck.get(first), state.deck.get(second)) {
        (Some(a), Some(b)) => ([a.uid, b.uid], a.pairs_with(b)),
        _ => {
            state.flipped.clear();
            state.locked = false;
            return Selection::Ignored(Ignored::UnknownCard);
        }
    };

    state.moves += 1;
    state.locked = true;

    if !is_match {
        return Selection::Mismatch { pair };
    }

    for index in [first, second] {
        if let Some(card) = state.deck.get_mut(index) {
            card.matched = true;
        }
    }
    state.matches += 1;
    state.flipped.clear();
    state.locked = false;

    Selection::Matched {
        pair,
        finished: state.is_finished(),
    }
}

/// Turn a mismatched pair back face down and release the lock.
///
/// A no-op for another session's pair. Only cards still revealed and
/// unmatched are hidden; the flip set is cleared only if it still holds
/// exactly this pair. Returns the cards that were hidden.
pub fn revert_mismatch(
    state: &mut GameState,
    session: SessionId,
    pair: [CardUid; 2],
) -> SmallVec<[CardUid; 2]> {
    let mut hidden = SmallVec::new();
    if session != state.session {
        return hidden;
    }

    let positions: SmallVec<[usize; 2]> = pair
        .iter()
        .filter_map(|uid| state.deck.position(*uid))
        .collect();

    for uid in pair {
        if let Some(card) = state.deck.card_mut(uid) {
            if card.revealed && !card.matched {
                card.revealed = false;
                hidden.push(uid);
            }
        }
    }

    if state.flipped.as_slice() == positions.as_slice() {
        state.flipped.clear();
        state.locked = false;
    }

    hidden
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck};
    use crate::core::TurnPhase;

    const S: SessionId = SessionId(1);

    fn uid(raw: u64) -> CardUid {
        CardUid::new(raw)
    }

    /// A1 B1 A2 B2 in grid order.
    fn state() -> GameState {
        GameState::new(
            S,
            Deck::from_cards(vec![
                Card::new(uid(1), "A"),
                Card::new(uid(2), "B"),
                Card::new(uid(3), "A"),
                Card::new(uid(4), "B"),
            ]),
        )
    }

    #[test]
    fn test_first_reveal() {
        let mut state = state();

        assert_eq!(select(&mut state, uid(1)), Selection::FirstReveal(uid(1)));
        assert!(state.started);
        assert!(state.card(uid(1)).unwrap().revealed);
        assert_eq!(state.moves, 0);
        assert_eq!(state.phase(), TurnPhase::OneFlipped);
    }

    #[test]
    fn test_same_card_twice() {
        let mut state = state();
        select(&mut state, uid(1));

        assert_eq!(
            select(&mut state, uid(1)),
            Selection::Ignored(Ignored::AlreadyRevealed)
        );
        assert_eq!(state.flipped.len(), 1);
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn test_match() {
        let mut state = state();
        select(&mut state, uid(1));
        let result = select(&mut state, uid(3));

        assert_eq!(
            result,
            Selection::Matched {
                pair: [uid(1), uid(3)],
                finished: false
            }
        );
        assert!(state.card(uid(1)).unwrap().matched);
        assert!(state.card(uid(3)).unwrap().matched);
        assert_eq!(state.matches, 1);
        assert_eq!(state.moves, 1);
        assert!(!state.locked);
        assert_eq!(state.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_mismatch_locks() {
        let mut state = state();
        select(&mut state, uid(1));
        let result = select(&mut state, uid(2));

        assert_eq!(result, Selection::Mismatch { pair: [uid(1), uid(2)] });
        assert!(state.locked);
        assert_eq!(state.moves, 1);
        assert_eq!(state.phase(), TurnPhase::Evaluating);
        assert_eq!(select(&mut state, uid(3)), Selection::Ignored(Ignored::Locked));
    }

    #[test]
    fn test_revert_mismatch() {
        let mut state = state();
        select(&mut state, uid(1));
        select(&mut state, uid(2));

        let hidden = revert_mismatch(&mut state, S, [uid(1), uid(2)]);

        assert_eq!(hidden.as_slice(), &[uid(1), uid(2)]);
        assert!(!state.card(uid(1)).unwrap().revealed);
        assert!(!state.card(uid(2)).unwrap().revealed);
        assert!(!state.locked);
        assert!(state.flipped.is_empty());
        assert_eq!(state.matches, 0);
    }

    #[test]
    fn test_revert_other_session_is_noop() {
        let mut state = state();
        select(&mut state, uid(1));
        select(&mut state, uid(2));

        let hidden = revert_mismatch(&mut state, SessionId(0), [uid(1), uid(2)]);

        assert!(hidden.is_empty());
        assert!(state.locked);
        assert!(state.card(uid(1)).unwrap().revealed);
    }

    #[test]
    fn test_revert_never_hides_matched() {
        let mut state = state();
        select(&mut state, uid(1));
        select(&mut state, uid(3));

        let hidden = revert_mismatch(&mut state, S, [uid(1), uid(3)]);

        assert!(hidden.is_empty());
        assert!(state.card(uid(1)).unwrap().matched);
        assert!(state.card(uid(1)).unwrap().is_face_up());
    }

    #[test]
    fn test_finish_on_last_pair() {
        let mut state = state();
        select(&mut state, uid(1));
        select(&mut state, uid(3));
        select(&mut state, uid(2));
        let result = select(&mut state, uid(4));

        assert_eq!(
            result,
            Selection::Matched {
                pair: [uid(2), uid(4)],
                finished: true
            }
        );
        assert_eq!(state.phase(), TurnPhase::Finished);
        assert_eq!(state.moves, 2);
    }

    #[test]
    fn test_matched_card_ignored() {
        let mut state = state();
        select(&mut state, uid(1));
        select(&mut state, uid(3));

        assert_eq!(
            select(&mut state, uid(1)),
            Selection::Ignored(Ignored::AlreadyMatched)
        );
    }

    #[test]
    fn test_unknown_card_ignored() {
        let mut state = state();
        assert_eq!(
            select(&mut state, uid(99)),
            Selection::Ignored(Ignored::UnknownCard)
        );
        assert!(!state.started);
    }

    #[test]
    fn test_selection_helpers() {
        assert_eq!(Selection::FirstReveal(uid(1)).revealed(), Some(uid(1)));
        assert_eq!(Selection::Mismatch { pair: [uid(1), uid(2)] }.revealed(), Some(uid(2)));
        assert_eq!(Selection::Ignored(Ignored::Locked).revealed(), None);
        assert!(!Selection::FirstReveal(uid(1)).is_move());
        assert!(Selection::Mismatch { pair: [uid(1), uid(2)] }.is_move());
    }
}
