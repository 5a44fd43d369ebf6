//! The render trait and the payloads it receives.

use serde::{Deserialize, Serialize};

use super::format::format_clock;
use crate::cards::CardView;
use crate::effects::Burst;
use crate::record::{BestRecord, RecordStatus};

/// HUD counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub moves: u32,
    pub matches: usize,
    pub total_pairs: usize,
    /// Elapsed time as `m:ss`.
    pub elapsed: String,
}

impl Hud {
    /// Build a HUD line from raw counters.
    #[must_use]
    pub fn new(moves: u32, matches: usize, total_pairs: usize, seconds: u32) -> Self {
        Self {
            moves,
            matches,
            total_pairs,
            elapsed: format_clock(seconds),
        }
    }
}

/// State of the one-time peek button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeekButton {
    pub enabled: bool,
    pub label: String,
}

impl PeekButton {
    /// Button for the given availability.
    #[must_use]
    pub fn new(available: bool) -> Self {
        let label = if available { "One-time peek" } else { "Peek used" };
        Self {
            enabled: available,
            label: label.to_string(),
        }
    }
}

/// Contents of the finish notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishReport {
    pub moves: u32,
    pub seconds: u32,
    /// Final time as `m:ss`.
    pub time: String,
    pub status: RecordStatus,
    pub message: String,
}

impl FinishReport {
    /// Report for a finished run.
    #[must_use]
    pub fn new(moves: u32, seconds: u32, status: RecordStatus) -> Self {
        Self {
            moves,
            seconds,
            time: format_clock(seconds),
            status,
            message: status.message().to_string(),
        }
    }
}

/// Everything the game asks of its display.
///
/// Only the card and HUD hooks are mandatory; the remaining hooks default to
/// doing nothing so a minimal host can ignore them.
pub trait RenderSink {
    /// Reflect one card's face-up and matched state.
    fn sync_card(&mut self, view: CardView);

    /// Throw away the grid and draw these cards in order.
    fn rebuild_grid(&mut self, cards: &[CardView]);

    /// Update move count, pair count and clock.
    fn update_hud(&mut self, hud: Hud);

    /// Show the finish notification.
    fn show_finish(&mut self, report: FinishReport);

    /// Hide the finish notification.
    fn hide_finish(&mut self) {}

    /// Play the celebration burst.
    fn burst(&mut self, _burst: Burst) {}

    /// Update the peek button.
    fn update_peek_button(&mut self, _button: PeekButton) {}

    /// Update the best-record panel; `None` means no record yet.
    fn update_best(&mut self, _best: Option<BestRecord>) {}
}
