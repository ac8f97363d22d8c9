//! Session state owned by the controller.
//!
//! - `Session`: screen, countdown, tiles, placement, outcome
//! - `SlidePlacement`: the set of tiles on the slide
//! - `TileLayout`: cosmetic tile positions

pub mod layout;
pub mod placement;
pub mod state;

pub use layout::{LayoutPosition, TileLayout};
pub use placement::SlidePlacement;
pub use state::{PlaceResult, Screen, Session, TimerTicket};
