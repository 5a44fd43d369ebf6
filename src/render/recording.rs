//! A render sink that records calls instead of drawing.

use serde::{Deserialize, Serialize};

use super::sink::{FinishReport, Hud, PeekButton, RenderSink};
use crate::cards::CardView;
use crate::core::CardUid;
use crate::effects::Burst;
use crate::record::BestRecord;

/// One call made on a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RenderCall {
    SyncCard(CardView),
    RebuildGrid(Vec<CardView>),
    UpdateHud(Hud),
    ShowFinish(FinishReport),
    HideFinish,
    Burst(Burst),
    UpdatePeekButton(PeekButton),
    UpdateBest(Option<BestRecord>),
}

/// Records render calls in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    calls: Vec<RenderCall>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far.
    #[must_use]
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Remove and return all calls so far.
    pub fn take(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }

    /// Clear the log.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Card syncs, in order.
    #[must_use]
    pub fn synced(&self) -> Vec<&CardView> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::SyncCard(view) => Some(view),
                _ => None,
            })
            .collect()
    }

    /// Most recent sync of one card.
    #[must_use]
    pub fn last_sync(&self, uid: CardUid) -> Option<&CardView> {
        self.synced().into_iter().rev().find(|view| view.uid == uid)
    }

    /// Most recent HUD update.
    #[must_use]
    pub fn last_hud(&self) -> Option<&Hud> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::UpdateHud(hud) => Some(hud),
            _ => None,
        })
    }

    /// Most recent finish notification.
    #[must_use]
    pub fn last_finish(&self) -> Option<&FinishReport> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::ShowFinish(report) => Some(report),
            _ => None,
        })
    }

    /// Number of calls matching a predicate.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&RenderCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl RenderSink for RecordingSink {
    fn sync_card(&mut self, view: CardView) {
        self.calls.push(RenderCall::SyncCard(view));
    }

    fn rebuild_grid(&mut self, cards: &[CardView]) {
        self.calls.push(RenderCall::RebuildGrid(cards.to_vec()));
    }

    fn update_hud(&mut self, hud: Hud) {
        self.calls.push(RenderCall::UpdateHud(hud));
    }

    fn show_finish(&mut self, report: FinishReport) {
        self.calls.push(RenderCall::ShowFinish(report));
    }

    fn hide_finish(&mut self) {
        self.calls.push(RenderCall::HideFinish);
    }

    fn burst(&mut self, burst: Burst) {
        self.calls.push(RenderCall::Burst(burst));
    }

    fn update_peek_button(&mut self, button: PeekButton) {
        self.calls.push(RenderCall::UpdatePeekButton(button));
    }

    fn update_best(&mut self, best: Option<BestRecord>) {
        self.calls.push(RenderCall::UpdateBest(best));
    }
}
