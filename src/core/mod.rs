//! Core types: identifiers, RNG, configuration and game state.
//!
//! Everything here is independent of how the game is drawn or stored.

pub mod entity;
pub mod rng;
pub mod config;
pub mod state;

pub use entity::{CardUid, SessionId};
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, GameConfig};
pub use state::{GameState, TurnPhase};
