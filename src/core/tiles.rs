//! Tile set - the fixed collection of tiles for one session.
//!
//! The `TileSet` keeps tiles in presentation order and provides lookup by
//! `TileId` and by name.

use rustc_hash::FxHashMap;

use super::tile::{Tile, TileId, TileKind};

/// Ordered collection of tiles with id lookup.
///
/// ## Example
///
/// ```
/// use slide_rush::core::{Tile, TileId, TileKind, TileSet};
///
/// let mut tiles = TileSet::new();
/// tiles.insert(Tile::text(TileId::new(0), "header", TileKind::Header, "Title", true));
/// tiles.insert(Tile::text(TileId::new(1), "meh", TileKind::Useless, "?", false));
///
/// assert_eq!(tiles.len(), 2);
/// assert_eq!(tiles.required_ids().collect::<Vec<_>>(), vec![TileId::new(0)]);
/// assert_eq!(tiles.id_of("meh"), Some(TileId::new(1)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileSet {
    tiles: Vec<Tile>,
    index: FxHashMap<TileId, usize>,
}

impl TileSet {
    /// Create a new empty tile set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven tiles of the sprint review slide.
    ///
    /// Five tiles are required; the two `Useless` tiles are decoys.
    #[must_use]
    pub fn sprint_review() -> Self {
        [
            Tile::text(
                TileId::new(0),
                "header",
                TileKind::Header,
                "Sprint 24 \u{2022} Wrap-up",
                true,
            ),
            Tile::list(
                TileId::new(1),
                "list",
                [
                    "Fixed the login bug",
                    "Finished the data export feature",
                    "Started on the new dashboard",
                ],
                true,
            ),
            Tile::text(TileId::new(2), "image", TileKind::Image, "", true),
            Tile::text(TileId::new(3), "chart", TileKind::Chart, "", true),
            Tile::text(
                TileId::new(4),
                "plans",
                TileKind::Plans,
                "Finish the dashboard and start testing the new API version",
                true,
            ),
            Tile::text(
                TileId::new(5),
                "useless1",
                TileKind::Useless,
                "Some text should go here",
                false,
            ),
            Tile::text(TileId::new(6), "useless2", TileKind::Useless, "\u{1F63A}", false),
        ]
        .into_iter()
        .collect()
    }

    /// Insert a tile.
    ///
    /// A tile with an already-known id replaces the old one in place, so ids
    /// stay unique.
    pub fn insert(&mut self, tile: Tile) {
        if let Some(&pos) = self.index.get(&tile.id) {
            self.tiles[pos] = tile;
        } else {
            self.index.insert(tile.id, self.tiles.len());
            self.tiles.push(tile);
        }
    }

    /// Get a tile by ID.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.index.get(&id).map(|&pos| &self.tiles[pos])
    }

    /// Check if a tile ID belongs to this set.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a tile ID by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<TileId> {
        self.tiles.iter().find(|t| t.name == name).map(|t| t.id)
    }

    /// Iterate tiles in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Iterate tile IDs in presentation order.
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().map(|t| t.id)
    }

    /// Iterate the IDs of required tiles.
    pub fn required_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().filter(|t| t.required).map(|t| t.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl FromIterator<Tile> for TileSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut set = TileSet::new();
        for tile in iter {
            set.insert(tile);
        }
        set
    }
}
