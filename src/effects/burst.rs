//! Celebration burst shown when a game is won.
//!
//! A burst is a bounded set of short-lived decorative pieces scattered
//! across the top of the board. Pieces are positioned in percent of the
//! board and expire after `lifetime_ms`.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Palette pieces are coloured from.
pub const BURST_COLORS: [&str; 5] = ["#ff7a18", "#ffd166", "#34d399", "#38bdf8", "#a78bfa"];

/// A single decorative piece.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BurstPiece {
    /// Horizontal position, percent of board width, in `[0, 100)`.
    pub left_pct: f64,
    /// Vertical position, percent of board height, in `[0, 20)`.
    pub top_pct: f64,
    /// CSS colour from [`BURST_COLORS`].
    pub color: String,
    /// Animation start delay, seconds, in `[0, 0.4)`.
    pub delay_s: f64,
    /// Initial rotation, degrees, in `[0, 360)`.
    pub rotation_deg: f64,
}

/// A full burst.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Burst {
    pub pieces: Vec<BurstPiece>,
    /// How long each piece stays before the renderer removes it.
    pub lifetime_ms: u64,
}

impl Burst {
    /// Generate `size` pieces.
    pub fn spawn(rng: &mut GameRng, size: usize, lifetime_ms: u64) -> Self {
        let pieces = (0..size)
            .map(|_| BurstPiece {
                left_pct: rng.gen_unit_scaled(100.0),
                top_pct: rng.gen_unit_scaled(20.0),
                color: rng
                    .choose(&BURST_COLORS)
                    .copied()
                    .unwrap_or(BURST_COLORS[0])
                    .to_string(),
                delay_s: rng.gen_unit_scaled(0.4),
                rotation_deg: rng.gen_unit_scaled(360.0),
            })
            .collect();

        Self { pieces, lifetime_ms }
    }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the burst has no pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_bounds() {
        let mut rng = GameRng::new(42);
        let burst = Burst::spawn(&mut rng, 32, 2000);

        assert_eq!(burst.len(), 32);
        assert_eq!(burst.lifetime_ms, 2000);

        for piece in &burst.pieces {
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!((0.0..20.0).contains(&piece.top_pct));
            assert!((0.0..0.4).contains(&piece.delay_s));
            assert!((0.0..360.0).contains(&piece.rotation_deg));
            assert!(BURST_COLORS.contains(&piece.color.as_str()));
        }
    }

    #[test]
    fn test_empty_burst() {
        let mut rng = GameRng::new(42);
        let burst = Burst::spawn(&mut rng, 0, 2000);
        assert!(burst.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let a = Burst::spawn(&mut GameRng::new(3), 8, 2000);
        let b = Burst::spawn(&mut GameRng::new(3), 8, 2000);
        assert_eq!(a, b);
    }
}
