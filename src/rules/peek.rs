//! The one-time peek.
//!
//! A peek shows every unmatched card for a while without touching any
//! card's `revealed` or `matched` field. It only sets the state's overlay
//! flag and the input lock, so it never generates a move.
//!
//! A peek can only start from a quiet board (unlocked, empty flip set, not
//! finished), so it never overlaps a pending mismatch revert.

use crate::core::{CardUid, GameState, SessionId};

/// Start the peek.
///
/// Returns the cards placed under the overlay, or `None` if a peek is not
/// allowed right now.
pub fn begin_peek(state: &mut GameState) -> Option<Vec<CardUid>> {
    if !state.can_peek() {
        return None;
    }

    state.peek_available = false;
    state.locked = true;
    state.peeking = true;
    Some(state.deck.unmatched())
}

/// End the peek and release the lock.
///
/// A no-op for another session or when no peek is active. Returns whether
/// the peek was ended.
pub fn end_peek(state: &mut GameState, session: SessionId) -> bool {
    if session != state.session || !state.peeking {
        return false;
    }

    state.peeking = false;
    state.locked = false;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck};
    use crate::core::TurnPhase;
    use crate::rules::turn::select;

    const S: SessionId = SessionId(4);

    fn state() -> GameState {
        GameState::new(
            S,
            Deck::from_cards(vec![
                Card::new(CardUid::new(1), "A"),
                Card::new(CardUid::new(2), "A"),
                Card::new(CardUid::new(3), "B"),
                Card::new(CardUid::new(4), "B"),
            ]),
        )
    }

    #[test]
    fn test_peek_covers_unmatched_only() {
        let mut state = state();
        select(&mut state, CardUid::new(1));
        select(&mut state, CardUid::new(2));

        let cards = begin_peek(&mut state).unwrap();

        assert_eq!(cards, vec![CardUid::new(3), CardUid::new(4)]);
        assert!(state.locked);
        assert!(!state.peek_available);
        assert_eq!(state.phase(), TurnPhase::Peeking);
    }

    #[test]
    fn test_peek_leaves_logical_state() {
        let mut state = state();
        let before = state.deck.clone();

        begin_peek(&mut state);

        assert_eq!(state.deck, before);
        assert_eq!(state.moves, 0);
    }

    #[test]
    fn test_peek_once() {
        let mut state = state();
        assert!(begin_peek(&mut state).is_some());
        assert!(end_peek(&mut state, S));

        assert!(begin_peek(&mut state).is_none());
        assert!(!state.locked);
    }

    #[test]
    fn test_peek_refused_mid_flip() {
        let mut state = state();
        select(&mut state, CardUid::new(1));

        assert!(begin_peek(&mut state).is_none());
        assert!(state.peek_available);
    }

    #[test]
    fn test_peek_refused_while_locked() {
        let mut state = state();
        select(&mut state, CardUid::new(1));
        select(&mut state, CardUid::new(3));
        assert!(state.locked);

        assert!(begin_peek(&mut state).is_none());
        assert!(state.peek_available);
    }

    #[test]
    fn test_selection_blocked_during_peek() {
        let mut state = state();
        begin_peek(&mut state);

        let result = select(&mut state, CardUid::new(1));

        assert!(!result.is_move());
        assert!(!state.card(CardUid::new(1)).unwrap().revealed);
    }

    #[test]
    fn test_end_peek_wrong_session() {
        let mut state = state();
        begin_peek(&mut state);

        assert!(!end_peek(&mut state, SessionId(3)));
        assert!(state.peeking);
        assert!(state.locked);
    }

    #[test]
    fn test_end_peek_without_peek() {
        let mut state = state();
        assert!(!end_peek(&mut state, S));
    }
}
