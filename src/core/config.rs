//! Game configuration.
//!
//! A `GameConfig` fixes everything a deal and its timing depend on:
//! - The pair target and the icon pool icons are drawn from
//! - Durations of the mismatch hold, the peek and the timer tick
//! - The storage key the best record lives under
//! - Size and lifetime of the celebration burst
//!
//! Configs are checked once with [`GameConfig::validate`] before a game uses
//! them; nothing downstream re-validates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::icons::DEFAULT_ICONS;

/// Number of pairs in a standard game.
pub const DEFAULT_PAIR_TARGET: usize = 8;

/// How long a mismatched pair stays face up (ms).
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 900;

/// How long a peek keeps every card visible (ms).
pub const DEFAULT_PEEK_DURATION_MS: u64 = 1600;

/// Timer resolution; one tick adds one elapsed second (ms).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Key the best record is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "neon-memory-lab-best";

/// Pieces per celebration burst.
pub const DEFAULT_BURST_SIZE: usize = 32;

/// Lifetime of a single burst piece (ms).
pub const DEFAULT_BURST_LIFETIME_MS: u64 = 2000;

/// Reasons a configuration cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A game needs at least one pair.
    #[error("pair target must be at least 1")]
    ZeroPairs,

    /// The pool cannot supply enough distinct icons.
    #[error("icon pool has {available} icons but {required} pairs were requested")]
    PoolTooSmall { required: usize, available: usize },

    /// Icons in the pool must be distinct, otherwise a "pair" could be four cards.
    #[error("icon {0:?} appears more than once in the pool")]
    DuplicateIcon(String),

    /// A duration that must be positive was zero.
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct icons, and pairs needed to win.
    pub pair_target: usize,

    /// Candidate icons; `pair_target` of them are used per deal.
    pub icon_pool: Vec<String>,

    /// Hold time before a mismatched pair flips back.
    pub mismatch_delay_ms: u64,

    /// Duration of the one-time peek.
    pub peek_duration_ms: u64,

    /// Interval between timer ticks.
    pub tick_interval_ms: u64,

    /// Key for the persisted best record.
    pub storage_key: String,

    /// Pieces in the finish burst.
    pub burst_size: usize,

    /// Lifetime of each burst piece.
    pub burst_lifetime_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_target: DEFAULT_PAIR_TARGET,
            icon_pool: DEFAULT_ICONS.iter().map(|icon| (*icon).to_string()).collect(),
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            peek_duration_ms: DEFAULT_PEEK_DURATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            burst_size: DEFAULT_BURST_SIZE,
            burst_lifetime_ms: DEFAULT_BURST_LIFETIME_MS,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_target(mut self, pairs: usize) -> Self {
        self.pair_target = pairs;
        self
    }

    /// Replace the icon pool.
    #[must_use]
    pub fn with_icon_pool<I, S>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.icon_pool = icons.into_iter().map(Into::into).collect();
        self
    }

    /// Set the mismatch hold time.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Set the peek duration.
    #[must_use]
    pub fn with_peek_duration_ms(mut self, ms: u64) -> Self {
        self.peek_duration_ms = ms;
        self
    }

    /// Set the timer tick interval.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the storage key for the best record.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the number of burst pieces.
    #[must_use]
    pub fn with_burst_size(mut self, size: usize) -> Self {
        self.burst_size = size;
        self
    }

    /// Total cards in a deal.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.pair_target * 2
    }

    /// Check that a game can be dealt and timed with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_target == 0 {
            return Err(ConfigError::ZeroPairs);
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for icon in &self.icon_pool {
            if !seen.insert(icon.as_str()) {
                return Err(ConfigError::DuplicateIcon(icon.clone()));
            }
        }

        if self.icon_pool.len() < self.pair_target {
            return Err(ConfigError::PoolTooSmall {
                required: self.pair_target,
                available: self.icon_pool.len(),
            });
        }

        if self.mismatch_delay_ms == 0 {
            return Err(ConfigError::ZeroDuration("mismatch delay"));
        }
        if self.peek_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("peek duration"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("tick interval"));
        }

        Ok(())
    }
}
