//! Game rules and lifecycle.
//!
//! - `turn`: selection, pair evaluation and mismatch revert
//! - `peek`: the one-time reveal of every unmatched card
//! - `engine`: the [`Game`] driver that owns state, time, records and display
//!
//! `turn` and `peek` are plain functions over an owned [`GameState`](crate::core::GameState);
//! they never schedule or draw anything.

pub mod engine;
pub mod input;
pub mod peek;
pub mod turn;

pub use engine::Game;
pub use input::Input;
pub use turn::{Ignored, Selection};
