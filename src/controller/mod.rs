//! Game controller and drag handling.
//!
//! - `GameController`: owns the session, applies `Intent`s, emits `GameEvent`s
//! - `DragHandler`: remembers the dragged tile and hit-tests drops
//!
//! The renderer talks to this module only through intents in and events out.

pub mod drag;
pub mod event;
pub mod game;
pub mod intent;

pub use drag::{DragHandler, DropDecision};
pub use event::{EventLog, Events, GameEvent, Notifier};
pub use game::GameController;
pub use intent::Intent;
