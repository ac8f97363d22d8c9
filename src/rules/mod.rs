//! Game rules: win evaluation and result-screen text.
//!
//! The controller calls into `WinCondition` for both manual finish and timer
//! expiry, so the two paths can never disagree.

pub mod flavor;
pub mod win;

pub use flavor::FlavorText;
pub use win::{AllRequiredPlaced, Outcome, WinCondition};
