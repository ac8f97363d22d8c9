//! Core types: tiles, geometry, RNG, configuration.
//!
//! Nothing in here knows about screens or timers; the session and controller
//! build on these.

pub mod config;
pub mod geometry;
pub mod rng;
pub mod tile;
pub mod tiles;

pub use config::GameConfig;
pub use geometry::{Bounds, Point};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRandom};
pub use tile::{Tile, TileContent, TileId, TileKind};
pub use tiles::TileSet;
