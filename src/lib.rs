//! # slide-rush
//!
//! Headless engine for a timed drag-and-drop game: drag content tiles onto a
//! slide before the countdown runs out, then get scored on whether every
//! required tile made it.
//!
//! ## Design Principles
//!
//! 1. **One writer**: `GameController` is the only thing that mutates a
//!    `Session`. Renderers read `&Session` and send `Intent`s.
//!
//! 2. **Deterministic**: No hidden clocks or global RNG. Time arrives as
//!    `Tick` intents and cosmetic randomness comes from an injected
//!    `RandomSource`, so whole games replay exactly in tests.
//!
//! 3. **Total operations**: Unknown tiles, stale ticks and drops that miss
//!    the slide are no-ops, never errors.
//!
//! ## Modules
//!
//! - `core`: Tiles, tile sets, geometry, RNG, configuration
//! - `session`: Session state, slide placement, tile layout
//! - `rules`: Win condition and result flavor text
//! - `controller`: State machine, drag handling, intents and events
//! - `timer`: Countdown task and the intent loop
//! - `error`: Configuration errors

pub mod controller;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    Bounds, GameConfig, GameRng, GameRngState, Point, RandomSource, ScriptedRandom, Tile,
    TileContent, TileId, TileKind, TileSet,
};

pub use crate::session::{
    LayoutPosition, PlaceResult, Screen, Session, SlidePlacement, TileLayout, TimerTicket,
};

pub use crate::rules::{AllRequiredPlaced, FlavorText, Outcome, WinCondition};

pub use crate::controller::{
    DragHandler, DropDecision, EventLog, Events, GameController, GameEvent, Intent, Notifier,
};

pub use crate::timer::{Countdown, GameLoop, LoopHandle};

pub use crate::error::ConfigError;
