//! Slide placement - which tiles are currently on the slide.
//!
//! Uses `im` persistent collections so a session snapshot handed to the
//! renderer is an O(1) clone.

use im::{HashMap as ImHashMap, HashSet as ImHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{Point, TileId};

/// Set of placed tile ids, each optionally with the point it was dropped at.
///
/// The drop point is cosmetic; evaluation only looks at membership.
///
/// ```
/// use slide_rush::core::{Point, TileId};
/// use slide_rush::session::SlidePlacement;
///
/// let mut placement = SlidePlacement::new();
/// assert!(placement.insert(TileId::new(0), Some(Point::new(4.0, 2.0))));
/// assert!(!placement.insert(TileId::new(0), None));
/// assert_eq!(placement.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlidePlacement {
    placed: ImHashSet<TileId>,
    drop_points: ImHashMap<TileId, Point>,
}

impl SlidePlacement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile. Returns false (and changes nothing) if it is already placed.
    pub fn insert(&mut self, id: TileId, at: Option<Point>) -> bool {
        if self.placed.contains(&id) {
            return false;
        }
        self.placed.insert(id);
        if let Some(point) = at {
            self.drop_points.insert(id, point);
        }
        true
    }

    /// Remove a tile. Returns true if it was placed.
    pub fn remove(&mut self, id: TileId) -> bool {
        self.drop_points.remove(&id);
        self.placed.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.placed.clear();
        self.drop_points.clear();
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.placed.contains(&id)
    }

    /// True if every id yielded by `ids` is placed.
    pub fn contains_all(&self, mut ids: impl Iterator<Item = TileId>) -> bool {
        ids.all(|id| self.placed.contains(&id))
    }

    /// Where the tile was dropped, if it is placed and the drop had a point.
    #[must_use]
    pub fn drop_point(&self, id: TileId) -> Option<Point> {
        self.drop_points.get(&id).copied()
    }

    /// Placed ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<TileId> {
        let mut ids: Vec<_> = self.placed.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}
