//! The game controller - the only writer of session state.
//!
//! ## State machine
//!
//! ```text
//!   Start --start_game--> Playing --finish / timer hits 0--> Result
//!                            ^                                  |
//!                            +------------start_game------------+
//! ```
//!
//! Every operation is total. Unknown tiles, stale ticks, drops outside the
//! slide and actions on the wrong screen all degrade to "no events".
//!
//! ## Example
//!
//! ```
//! use slide_rush::controller::{GameController, GameEvent};
//! use slide_rush::core::GameConfig;
//! use slide_rush::session::Screen;
//!
//! let mut game = GameController::new(GameConfig::default());
//! let ticket = game.start_game();
//!
//! for name in ["header", "list", "image", "chart", "plans"] {
//!     let id = game.session().tiles().id_of(name).unwrap();
//!     game.place_tile(id);
//! }
//! game.tick(ticket);
//!
//! let events = game.finish();
//! assert_eq!(events.as_slice(), &[GameEvent::SessionSucceeded { elapsed: 1 }]);
//! assert_eq!(game.session().screen(), Screen::Result);
//! ```

use smallvec::smallvec;
use tracing::{debug, info};

use crate::core::{Bounds, GameConfig, GameRng, Point, RandomSource, TileId, TileSet};
use crate::error::Result;
use crate::rules::{AllRequiredPlaced, FlavorText, WinCondition};
use crate::session::{PlaceResult, Session, TileLayout, TimerTicket};

use super::drag::{DragHandler, DropDecision};
use super::event::{Events, GameEvent};
use super::intent::Intent;

/// Owns the session and the drag handler; applies intents.
pub struct GameController<W = AllRequiredPlaced, R = GameRng> {
    config: GameConfig,
    session: Session,
    drag: DragHandler,
    win: W,
    rng: R,
    flavor: Option<&'static str>,
}

impl GameController {
    /// Sprint-review tiles, all-required win rule, seeded `GameRng`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed).for_context("cosmetics");
        Self::with_parts(config, TileSet::sprint_review(), AllRequiredPlaced, rng)
    }

    /// Like `new`, but rejects a config that cannot describe a playable session.
    pub fn try_new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<W: WinCondition, R: RandomSource> GameController<W, R> {
    /// Assemble a controller from explicit parts.
    #[must_use]
    pub fn with_parts(config: GameConfig, tiles: TileSet, win: W, rng: R) -> Self {
        let session = Session::new(&config, tiles);
        Self {
            config,
            session,
            drag: DragHandler::new(),
            win,
            rng,
            flavor: None,
        }
    }

    /// Read-only view for the renderer.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Tile currently being dragged.
    #[must_use]
    pub fn dragging(&self) -> Option<TileId> {
        self.drag.active()
    }

    /// The cosmetic random source. Layout rolls and flavor picks share it,
    /// so capturing a `GameRng` state replays both.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Closing line for the result screen; `None` before a session ends.
    #[must_use]
    pub fn flavor_text(&self) -> Option<&'static str> {
        self.flavor
    }

    /// Apply one intent.
    pub fn dispatch(&mut self, intent: Intent) -> Events {
        match intent {
            Intent::StartGame => {
                self.start_game();
                Events::new()
            }
            Intent::Tick(ticket) => self.tick(ticket),
            Intent::BeginDrag(tile) => {
                self.begin_drag(tile);
                Events::new()
            }
            Intent::EndDrag => {
                self.end_drag();
                Events::new()
            }
            Intent::Drop { pointer, slide } => self.drop_at(pointer, slide),
            Intent::RemoveTile(tile) => self.remove_tile(tile),
            Intent::Finish => self.finish(),
        }
    }

    /// Begin a new session from any screen.
    ///
    /// Clears the slide, refills the timer, re-rolls tile positions and
    /// returns the ticket the new countdown must present.
    pub fn start_game(&mut self) -> TimerTicket {
        let layout = TileLayout::roll(
            self.session.tiles(),
            &mut self.rng,
            self.config.layout_min,
            self.config.layout_max,
        );
        self.drag.end_drag();
        self.flavor = None;
        let ticket = self.session.reset(layout);
        info!(
            epoch = ticket.epoch(),
            initial_time = self.session.initial_time(),
            tiles = self.session.tiles().len(),
            "session started"
        );
        ticket
    }

    /// One time unit elapsed. Reaching zero finishes the session.
    ///
    /// Ignored unless playing with the current ticket.
    pub fn tick(&mut self, ticket: TimerTicket) -> Events {
        if !self.session.accepts_tick(ticket) {
            debug!(
                epoch = ticket.epoch(),
                screen = ?self.session.screen(),
                "ignoring stale tick"
            );
            return Events::new();
        }

        let remaining = self.session.decrement();
        debug!(remaining, "tick");
        if remaining == 0 {
            info!("time is up");
            self.finish()
        } else {
            Events::new()
        }
    }

    /// Evaluate the slide and move to the result screen.
    ///
    /// A no-op outside `Playing`, so a manual finish racing the expiry tick
    /// is counted once.
    pub fn finish(&mut self) -> Events {
        if !self.session.is_playing() {
            debug!(screen = ?self.session.screen(), "finish ignored");
            return Events::new();
        }

        let success = self.win.is_met(self.session.tiles(), self.session.placement());
        let outcome = self.session.conclude(success);
        self.drag.end_drag();
        self.flavor = Some(FlavorText::pick(success, &mut self.rng));

        info!(
            success,
            elapsed = outcome.elapsed,
            placed = self.session.placed_count(),
            "session finished"
        );

        if success {
            smallvec![GameEvent::SessionSucceeded {
                elapsed: outcome.elapsed
            }]
        } else {
            smallvec![GameEvent::SessionFailed {
                elapsed: outcome.elapsed
            }]
        }
    }

    /// Put a tile on the slide.
    pub fn place_tile(&mut self, tile: TileId) -> Events {
        self.place_tile_at(tile, None)
    }

    fn place_tile_at(&mut self, tile: TileId, at: Option<Point>) -> Events {
        match self.session.place(tile, at) {
            PlaceResult::Placed => {
                debug!(%tile, placed = self.session.placed_count(), "tile placed");
                smallvec![GameEvent::TilePlaced { tile }]
            }
            PlaceResult::AlreadyPlaced => smallvec![GameEvent::TileAlreadyPlaced { tile }],
            result @ (PlaceResult::UnknownTile | PlaceResult::NotPlaying) => {
                debug!(%tile, ?result, "placement ignored");
                Events::new()
            }
        }
    }

    /// Take a tile off the slide. Unplaced or unknown tiles are ignored.
    pub fn remove_tile(&mut self, tile: TileId) -> Events {
        if self.session.remove(tile) {
            debug!(%tile, placed = self.session.placed_count(), "tile removed");
            smallvec![GameEvent::TileRemoved { tile }]
        } else {
            Events::new()
        }
    }

    /// Start dragging a tile. Unknown tiles are ignored.
    pub fn begin_drag(&mut self, tile: TileId) {
        if self.session.tiles().contains(tile) {
            self.drag.begin_drag(tile);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.end_drag();
    }

    /// Release the dragged tile at `pointer`.
    ///
    /// Inside the slide the tile is placed. Outside, nothing happens: a tile
    /// already on the slide stays there until removed explicitly.
    pub fn drop_at(&mut self, pointer: Point, slide: Bounds) -> Events {
        match self.drag.evaluate_drop(pointer, slide) {
            DropDecision::Place(tile) => self.place_tile_at(tile, Some(pointer)),
            DropDecision::Outside | DropDecision::NoActiveDrag => Events::new(),
        }
    }
}
