//! # memory-lab
//!
//! Rules engine for a single-player memory (card-pairs) game.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One `GameState` value per session, mutated only by
//!    plain transition functions and replaced wholesale on reset.
//!
//! 2. **Virtual Time**: Delays and the game clock are deferred events in a
//!    scheduler. The host advances time; nothing blocks.
//!
//! 3. **Session Identity**: Every deferred event carries the session that
//!    scheduled it. Events from a superseded session are no-ops.
//!
//! 4. **Toolkit-Free**: Display and storage sit behind the `RenderSink` and
//!    `RecordStore` traits.
//!
//! ## Modules
//!
//! - `core`: Identifiers, RNG, configuration, game state
//! - `cards`: Cards, deck builder, icon pool
//! - `rules`: Turn resolution, peek, and the `Game` lifecycle driver
//! - `schedule`: Virtual-time scheduler and the tick timer
//! - `render`: Render trait, payloads and a recording sink
//! - `record`: Best record, store trait and keeper
//! - `effects`: Celebration burst

pub mod core;
pub mod cards;
pub mod rules;
pub mod schedule;
pub mod render;
pub mod record;
pub mod effects;

// Re-export commonly used types
pub use crate::core::{
    CardUid, SessionId,
    GameRng, GameRngState,
    ConfigError, GameConfig,
    GameState, TurnPhase,
};

pub use crate::cards::{build_deck, Card, CardView, Deck, DEFAULT_ICONS};

pub use crate::rules::{Game, Ignored, Input, Selection};

pub use crate::schedule::{Deferred, EventId, GameTimer, ScheduledEvent, Scheduler};

pub use crate::render::{format_clock, FinishReport, Hud, PeekButton, RecordingSink, RenderCall, RenderSink};

pub use crate::record::{BestRecord, BestRecordKeeper, MemoryStore, RecordError, RecordStatus, RecordStore, StoreError};

pub use crate::effects::{Burst, BurstPiece};
