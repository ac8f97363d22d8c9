//! Win condition and session outcome.

use serde::{Deserialize, Serialize};

use crate::core::TileSet;
use crate::session::SlidePlacement;

/// Result of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the win condition held at evaluation time.
    pub success: bool,

    /// Time units spent: `initial_time - remaining`.
    pub elapsed: u32,
}

/// Decides whether a placement wins.
///
/// Implementations must be pure: the same tiles and placement always give
/// the same answer, so expiry and manual finish agree.
pub trait WinCondition {
    fn is_met(&self, tiles: &TileSet, placement: &SlidePlacement) -> bool;
}

/// Every required tile is on the slide. Optional tiles are ignored, so
/// decoys on the slide never cost the win.
///
/// ```
/// use slide_rush::core::TileSet;
/// use slide_rush::rules::{AllRequiredPlaced, WinCondition};
/// use slide_rush::session::SlidePlacement;
///
/// let tiles = TileSet::sprint_review();
/// let mut placement = SlidePlacement::new();
/// for id in tiles.required_ids() {
///     placement.insert(id, None);
/// }
/// assert!(AllRequiredPlaced.is_met(&tiles, &placement));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllRequiredPlaced;

impl WinCondition for AllRequiredPlaced {
    fn is_met(&self, tiles: &TileSet, placement: &SlidePlacement) -> bool {
        placement.contains_all(tiles.required_ids())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    fn place(names: &[&str]) -> (TileSet, SlidePlacement) {
        let tiles = TileSet::sprint_review();
        let mut placement = SlidePlacement::new();
        for name in names {
            placement.insert(tiles.id_of(name).unwrap(), None);
        }
        (tiles, placement)
    }

    #[test]
    fn test_all_required_wins() {
        let (tiles, placement) = place(&["header", "list", "image", "chart", "plans"]);
        assert!(AllRequiredPlaced.is_met(&tiles, &placement));
    }

    #[test]
    fn test_decoys_do_not_matter() {
        let (tiles, placement) =
            place(&["header", "list", "image", "chart", "plans", "useless1", "useless2"]);
        assert!(AllRequiredPlaced.is_met(&tiles, &placement));
    }

    #[test]
    fn test_missing_required_loses() {
        let (tiles, placement) = place(&["header", "list", "image", "chart", "useless1"]);
        assert!(!AllRequiredPlaced.is_met(&tiles, &placement));

        let (tiles, empty) = place(&[]);
        assert!(!AllRequiredPlaced.is_met(&tiles, &empty));
    }

    #[test]
    fn test_no_required_tiles_always_wins() {
        let mut tiles = TileSet::new();
        tiles.insert(crate::core::Tile::text(
            TileId::new(0),
            "meh",
            crate::core::TileKind::Useless,
            "?",
            false,
        ));
        assert!(AllRequiredPlaced.is_met(&tiles, &SlidePlacement::new()));
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = Outcome {
            success: true,
            elapsed: 3,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), outcome);
    }
}
