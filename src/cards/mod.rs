//! Cards, the deck builder and the default icon pool.
//!
//! Cards are created in bulk when a game is dealt and discarded on reset.
//! The deck keeps them in a fixed grid order for the whole game.

pub mod card;
pub mod deck;
pub mod icons;

pub use card::{Card, CardView};
pub use deck::{build_deck, Deck};
pub use icons::DEFAULT_ICONS;
