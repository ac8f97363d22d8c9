//! Intents - everything the outside world can ask the controller to do.

use crate::core::{Bounds, Point, TileId};
use crate::session::TimerTicket;

/// A discrete input, consumed one at a time by `GameController::dispatch`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    /// Start (or restart) a session.
    StartGame,

    /// One time unit elapsed for the countdown identified by the ticket.
    Tick(TimerTicket),

    /// The player picked up a tile.
    BeginDrag(TileId),

    /// The drag gesture ended, whether or not it dropped anywhere.
    EndDrag,

    /// The dragged tile was released at `pointer`; `slide` is the slide
    /// region's bounds at that moment.
    Drop { pointer: Point, slide: Bounds },

    /// The player clicked a placed tile to take it off the slide.
    RemoveTile(TileId),

    /// The player pressed "done".
    Finish,
}
