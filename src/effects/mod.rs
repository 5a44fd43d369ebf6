//! Cosmetic effects.
//!
//! Nothing here touches game state; effects are generated and handed to the
//! render collaborator.

mod burst;

pub use burst::{Burst, BurstPiece, BURST_COLORS};
