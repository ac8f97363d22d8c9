//! Cosmetic tile positions, re-rolled at the start of every session.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{RandomSource, TileId, TileSet};

/// A tile's on-screen position, in percent of the tile tray.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutPosition {
    pub x: f64,
    pub y: f64,
}

/// Positions for every tile in a set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileLayout {
    positions: FxHashMap<TileId, LayoutPosition>,
}

impl TileLayout {
    /// Roll a position in `[min, max)` on both axes for every tile.
    ///
    /// Tiles are visited in presentation order, x before y, so a scripted
    /// source maps predictably onto tiles.
    pub fn roll(tiles: &TileSet, rng: &mut impl RandomSource, min: f64, max: f64) -> Self {
        let span = max - min;
        let positions = tiles
            .ids()
            .map(|id| {
                let x = min + rng.next_unit() * span;
                let y = min + rng.next_unit() * span;
                (id, LayoutPosition { x, y })
            })
            .collect();
        Self { positions }
    }

    #[must_use]
    pub fn position(&self, id: TileId) -> Option<LayoutPosition> {
        self.positions.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
