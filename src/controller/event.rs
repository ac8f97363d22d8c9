//! Semantic events emitted by the controller.
//!
//! Events are what an acknowledgment layer (toasts, sounds, logs) reacts to.
//! The controller never depends on how they are shown.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tokio::sync::mpsc::UnboundedSender;

use crate::core::TileId;

/// Something the player should be told about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A tile was put on the slide.
    TilePlaced { tile: TileId },

    /// A placement was attempted for a tile that is already on the slide.
    TileAlreadyPlaced { tile: TileId },

    /// A tile was taken off the slide.
    TileRemoved { tile: TileId },

    /// The session finished with every required tile placed.
    SessionSucceeded { elapsed: u32 },

    /// The session finished with a required tile missing.
    SessionFailed { elapsed: u32 },
}

impl GameEvent {
    /// Default user-facing message, for events that warrant one.
    #[must_use]
    pub fn acknowledgement(&self) -> Option<&'static str> {
        match self {
            GameEvent::TilePlaced { .. } => Some("Tile added to the slide!"),
            GameEvent::SessionSucceeded { .. } => Some("Great job! The deck is ready!"),
            GameEvent::SessionFailed { .. } => Some("Not every tile made it onto the slide!"),
            GameEvent::TileAlreadyPlaced { .. } | GameEvent::TileRemoved { .. } => None,
        }
    }

    /// Whether this event ends a session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameEvent::SessionSucceeded { .. } | GameEvent::SessionFailed { .. }
        )
    }
}

/// Events produced by one intent. Almost always zero or one.
pub type Events = SmallVec<[GameEvent; 2]>;

/// Consumer of controller events.
pub trait Notifier {
    fn notify(&mut self, event: &GameEvent);
}

/// Forwards events to another task. A closed channel drops them silently.
impl Notifier for UnboundedSender<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        let _ = self.send(*event);
    }
}

/// Notifier that keeps every event, for headless drivers and tests.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of session-ending events seen.
    #[must_use]
    pub fn terminal_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_terminal()).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Notifier for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(*event);
    }
}
