//! Real-time driving: a countdown task and the loop that serializes intents.
//!
//! The controller itself never sleeps. `Countdown` turns wall-clock time into
//! `Intent::Tick`s, and `GameLoop` feeds those and the player's intents to
//! the controller one at a time.

pub mod countdown;
pub mod game_loop;

pub use countdown::{Countdown, MIN_PERIOD};
pub use game_loop::{GameLoop, LoopHandle};
