//! Session state: everything one play-through owns.
//!
//! The renderer gets `&Session` and reads it through accessors. All writes
//! are `pub(crate)` and go through `GameController`, which keeps the
//! invariants:
//! - placement is a subset of the tile ids
//! - `remaining` stays in `[0, initial_time]` and only decreases while playing
//! - `outcome` is `Some` exactly when the screen is `Result`

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Point, Tile, TileId, TileSet};
use crate::rules::Outcome;

use super::layout::TileLayout;
use super::placement::SlidePlacement;

/// Which screen the game is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Start,
    Playing,
    Result,
}

/// Proof that a countdown belongs to a particular play-through.
///
/// Issued on every `start_game`; ticks carrying an older epoch are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    pub(crate) epoch: u64,
}

impl TimerTicket {
    #[must_use]
    pub fn epoch(self) -> u64 {
        self.epoch
    }
}

/// Result of trying to put a tile on the slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceResult {
    Placed,
    AlreadyPlaced,
    UnknownTile,
    /// Placement is only possible while playing.
    NotPlaying,
}

/// One play-through's full state.
#[derive(Clone, Debug)]
pub struct Session {
    screen: Screen,
    initial_time: u32,
    remaining: u32,
    critical_threshold: u32,
    outcome: Option<Outcome>,
    tiles: TileSet,
    placement: SlidePlacement,
    layout: TileLayout,
    epoch: u64,
}

impl Session {
    /// A fresh session on the start screen.
    #[must_use]
    pub fn new(config: &GameConfig, tiles: TileSet) -> Self {
        Self {
            screen: Screen::Start,
            initial_time: config.initial_time,
            remaining: config.initial_time,
            critical_threshold: config.critical_threshold,
            outcome: None,
            tiles,
            placement: SlidePlacement::new(),
            layout: TileLayout::default(),
            epoch: 0,
        }
    }

    // === Read access ===

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }

    #[must_use]
    pub fn initial_time(&self) -> u32 {
        self.initial_time
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown is in its final seconds.
    #[must_use]
    pub fn is_time_critical(&self) -> bool {
        self.is_playing() && self.remaining <= self.critical_threshold
    }

    /// Outcome of the finished session; `None` until the result screen.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    #[must_use]
    pub fn placement(&self) -> &SlidePlacement {
        &self.placement
    }

    #[must_use]
    pub fn is_placed(&self, id: TileId) -> bool {
        self.placement.contains(id)
    }

    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placement.len()
    }

    #[must_use]
    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Ticket for the countdown of the current play-through, if one runs.
    #[must_use]
    pub fn timer_ticket(&self) -> Option<TimerTicket> {
        self.is_playing().then_some(TimerTicket { epoch: self.epoch })
    }

    // === Mutation (controller only) ===

    /// Enter `Playing` with an empty slide and a full timer.
    pub(crate) fn reset(&mut self, layout: TileLayout) -> TimerTicket {
        self.placement.clear();
        self.remaining = self.initial_time;
        self.outcome = None;
        self.layout = layout;
        self.screen = Screen::Playing;
        self.epoch += 1;
        TimerTicket { epoch: self.epoch }
    }

    /// Whether a tick for `ticket` may still be applied.
    pub(crate) fn accepts_tick(&self, ticket: TimerTicket) -> bool {
        self.is_playing() && ticket.epoch == self.epoch
    }

    /// Count down one unit. Returns the new remaining time.
    pub(crate) fn decrement(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Leave `Playing` for `Result`, invalidating any outstanding ticket.
    pub(crate) fn conclude(&mut self, success: bool) -> Outcome {
        let outcome = Outcome {
            success,
            elapsed: self.initial_time - self.remaining,
        };
        self.outcome = Some(outcome);
        self.screen = Screen::Result;
        self.epoch += 1;
        outcome
    }

    pub(crate) fn place(&mut self, id: TileId, at: Option<Point>) -> PlaceResult {
        if !self.is_playing() {
            return PlaceResult::NotPlaying;
        }
        if !self.tiles.contains(id) {
            return PlaceResult::UnknownTile;
        }
        if self.placement.insert(id, at) {
            PlaceResult::Placed
        } else {
            PlaceResult::AlreadyPlaced
        }
    }

    /// Returns true if the tile was on the slide.
    pub(crate) fn remove(&mut self, id: TileId) -> bool {
        self.is_playing() && self.placement.remove(id)
    }
}
