//! Game lifecycle: the driver that ties rules, time, records and display.
//!
//! `Game` owns one [`GameState`] at a time and replaces it wholesale on
//! reset. It applies the pure transitions from [`turn`](super::turn) and
//! [`peek`](super::peek), turns their results into render calls and
//! deferred events, and runs those events as the host advances time.
//!
//! ## Driving a game
//!
//! ```
//! use memory_lab::core::{GameConfig, GameRng};
//! use memory_lab::record::MemoryStore;
//! use memory_lab::render::RecordingSink;
//! use memory_lab::rules::{Game, Input};
//!
//! let mut game = Game::with_rng(
//!     GameConfig::new(),
//!     GameRng::new(42),
//!     RecordingSink::new(),
//!     MemoryStore::new(),
//! )
//! .unwrap();
//!
//! let first = game.state().deck.get(0).unwrap().uid;
//! game.handle(Input::SelectCard(first));
//! game.advance(3_000);
//!
//! assert!(game.state().started);
//! assert_eq!(game.state().seconds, 3);
//! ```

use log::{debug, info};

use super::input::Input;
use super::peek::{begin_peek, end_peek};
use super::turn::{self, Selection};
use crate::cards::{build_deck, CardView, Deck};
use crate::core::{CardUid, ConfigError, GameConfig, GameRng, GameState, SessionId};
use crate::effects::Burst;
use crate::record::{BestRecord, BestRecordKeeper, RecordStatus, RecordStore};
use crate::render::{FinishReport, Hud, PeekButton, RenderSink};
use crate::schedule::{Deferred, GameTimer, ScheduledEvent, Scheduler};

/// A memory game wired to a display and a record store.
pub struct Game<R: RenderSink, S: RecordStore> {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    scheduler: Scheduler,
    timer: GameTimer,
    keeper: BestRecordKeeper<S>,
    render: R,
    best: Option<BestRecord>,
    finish: Option<FinishReport>,
    finish_visible: bool,
}

impl<R: RenderSink, S: RecordStore> Game<R, S> {
    /// Create a game seeded from the operating system and deal the first deck.
    pub fn new(config: GameConfig, render: R, store: S) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy(), render, store)
    }

    /// Create a game with an explicit RNG and deal the first deck.
    ///
    /// Reads the stored best record for the best-record panel before dealing.
    pub fn with_rng(config: GameConfig, rng: GameRng, render: R, store: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let keeper = BestRecordKeeper::new(store, config.storage_key.clone());
        let timer = GameTimer::new(config.tick_interval_ms);
        let mut game = Self {
            config,
            state: GameState::new(SessionId::default(), Deck::default()),
            rng,
            scheduler: Scheduler::new(),
            timer,
            keeper,
            render,
            best: None,
            finish: None,
            finish_visible: false,
        };

        game.best = game.keeper.load();
        debug!("[Game] Best record under {:?}: {:?}", game.keeper.key(), game.best);
        game.render.update_best(game.best);
        game.reset();
        Ok(game)
    }

    // === Accessors ===

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current state, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current session.
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.state.session
    }

    /// Virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Number of deferred events waiting to fire.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.scheduler.len()
    }

    /// Whether the game clock is running.
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Best record as last read from the store.
    #[must_use]
    pub fn best(&self) -> Option<BestRecord> {
        self.best
    }

    /// The finish report of the current session, once won.
    #[must_use]
    pub fn finish_report(&self) -> Option<&FinishReport> {
        self.finish.as_ref()
    }

    /// Whether the finish notification is showing.
    #[must_use]
    pub fn is_finish_visible(&self) -> bool {
        self.finish_visible
    }

    /// The display.
    #[must_use]
    pub fn render(&self) -> &R {
        &self.render
    }

    /// Mutable access to the display.
    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// The record store.
    #[must_use]
    pub fn store(&self) -> &S {
        self.keeper.store()
    }

    /// Views of every card in grid order, including any peek overlay.
    #[must_use]
    pub fn views(&self) -> Vec<CardView> {
        self.state.deck.iter().filter_map(|card| self.view(card.uid)).collect()
    }

    // === Inputs ===

    /// Dispatch a user input.
    pub fn handle(&mut self, input: Input) {
        match input {
            Input::SelectCard(uid) => {
                self.select(uid);
            }
            Input::Restart => self.reset(),
            Input::Peek => {
                self.peek();
            }
            Input::DismissFinish => self.dismiss_finish(),
        }
    }

    /// Select a card.
    pub fn select(&mut self, uid: CardUid) -> Selection {
        let was_started = self.state.started;
        let selection = turn::select(&mut self.state, uid);

        if let Selection::Ignored(reason) = selection {
            debug!("[Game] Ignored selection of {}: {:?}", uid, reason);
            return selection;
        }

        if !was_started && self.state.started {
            self.timer.start(&mut self.scheduler, self.state.session);
            info!("[Game] {} started", self.state.session);
        }

        if let Some(revealed) = selection.revealed() {
            self.sync(revealed);
        }

        match selection {
            Selection::Matched { pair, finished } => {
                self.update_hud();
                for uid in pair {
                    self.sync(uid);
                }
                if finished {
                    self.finish();
                }
            }
            Selection::Mismatch { pair } => {
                self.update_hud();
                self.scheduler.schedule(
                    self.config.mismatch_delay_ms,
                    self.state.session,
                    Deferred::MismatchRevert { pair },
                );
            }
            Selection::FirstReveal(_) | Selection::Ignored(_) => {}
        }

        selection
    }

    /// Use the one-time peek.
    ///
    /// Returns false, changing nothing, when a peek is not allowed.
    pub fn peek(&mut self) -> bool {
        let Some(cards) = begin_peek(&mut self.state) else {
            debug!("[Game] Peek refused");
            return false;
        };

        self.render.update_peek_button(PeekButton::new(false));
        for &uid in &cards {
            self.sync(uid);
        }
        self.scheduler.schedule(
            self.config.peek_duration_ms,
            self.state.session,
            Deferred::PeekRevert { cards },
        );
        true
    }

    /// Close the finish notification.
    pub fn dismiss_finish(&mut self) {
        if self.finish_visible {
            self.finish_visible = false;
            self.render.hide_finish();
        }
    }

    /// Start a new game: stop the clock, drop pending work, deal a new deck
    /// and redraw everything.
    pub fn reset(&mut self) {
        self.timer.stop(&mut self.scheduler);

        let session = self.state.session.next();
        let dropped = self.scheduler.cancel_stale(session);
        if dropped > 0 {
            debug!("[Game] Dropped {} pending events from the previous session", dropped);
        }

        let deck = build_deck(&self.config.icon_pool, self.config.pair_target, &mut self.rng);
        self.state = GameState::new(session, deck);
        self.finish = None;

        let views = self.views();
        self.render.rebuild_grid(&views);
        self.update_hud();
        self.render.update_peek_button(PeekButton::new(true));
        self.finish_visible = false;
        self.render.hide_finish();

        info!("[Game] New deal for {}: {} pairs", session, self.config.pair_target);
    }

    // === Time ===

    /// Advance virtual time by `ms`, running every deferred event that falls
    /// due, in order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.scheduler.now().saturating_add(ms);
        while let Some(scheduled) = self.scheduler.pop_due(target) {
            self.fire(scheduled);
        }
        self.scheduler.advance_clock(target);
    }

    fn fire(&mut self, scheduled: ScheduledEvent) {
        if scheduled.session != self.state.session {
            debug!(
                "[Game] Stale {:?} from {} ignored in {}",
                scheduled.event, scheduled.session, self.state.session
            );
            return;
        }

        match scheduled.event {
            Deferred::Tick => {
                if self.timer.on_tick(&mut self.scheduler, scheduled.id, scheduled.session) {
                    self.state.seconds = self.state.seconds.saturating_add(1);
                    if self.state.seconds == u32::MAX {
                        self.timer.stop(&mut self.scheduler);
                    }
                    self.update_hud();
                }
            }
            Deferred::MismatchRevert { pair } => {
                turn::revert_mismatch(&mut self.state, scheduled.session, pair);
                for uid in pair {
                    self.sync(uid);
                }
            }
            Deferred::PeekRevert { cards } => {
                end_peek(&mut self.state, scheduled.session);
                for uid in cards {
                    self.sync(uid);
                }
            }
        }
    }

    // === Finish ===

    fn finish(&mut self) {
        self.timer.stop(&mut self.scheduler);

        let run = BestRecord::new(self.state.moves, self.state.seconds);
        let status = self.keeper.submit(run);
        if status == RecordStatus::NewRecord {
            self.best = self.keeper.load();
            self.render.update_best(self.best);
        }

        let report = FinishReport::new(run.moves, run.seconds, status);
        info!(
            "[Game] {} finished: {} moves in {} ({:?})",
            self.state.session, report.moves, report.time, status
        );
        self.finish = Some(report.clone());
        self.finish_visible = true;
        self.render.show_finish(report);

        let mut cosmetic = self.rng.fork();
        let burst = Burst::spawn(&mut cosmetic, self.config.burst_size, self.config.burst_lifetime_ms);
        self.render.burst(burst);
    }

    // === Display ===

    fn view(&self, uid: CardUid) -> Option<CardView> {
        let card = self.state.card(uid)?;
        Some(if self.state.peeking {
            CardView::peeked(card)
        } else {
            CardView::of(card)
        })
    }

    fn sync(&mut self, uid: CardUid) {
        if let Some(view) = self.view(uid) {
            self.render.sync_card(view);
        }
    }

    fn update_hud(&mut self) {
        let hud = Hud::new(
            self.state.moves,
            self.state.matches,
            self.state.pair_target(),
            self.state.seconds,
        );
        self.render.update_hud(hud);
    }
}
