//! Tile definitions - the placeable content units of a slide.
//!
//! A `Tile` is immutable once created: its kind, content and requiredness
//! never change during a session. Whether a tile is on the slide is tracked
//! separately by `SlidePlacement`.
//!
//! ## Example
//!
//! ```
//! use slide_rush::core::{Tile, TileId, TileKind};
//!
//! let header = Tile::text(TileId::new(0), "header", TileKind::Header, "Sprint 24", true);
//! let list = Tile::list(TileId::new(1), "list", ["Fixed login", "Shipped export"], true);
//!
//! assert!(header.required);
//! assert_eq!(list.content.items().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a tile within a tile set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// The closed set of tile kinds a slide can be built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// Slide title.
    Header,
    /// Bullet list of accomplishments.
    List,
    /// Product screenshot.
    Image,
    /// Progress chart.
    Chart,
    /// Next-sprint plans.
    Plans,
    /// Filler that does not belong on the slide.
    Useless,
}

impl TileKind {
    /// All kinds, in presentation order.
    pub const ALL: [TileKind; 6] = [
        TileKind::Header,
        TileKind::List,
        TileKind::Image,
        TileKind::Chart,
        TileKind::Plans,
        TileKind::Useless,
    ];

    /// Lowercase name used by renderers and config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileKind::Header => "header",
            TileKind::List => "list",
            TileKind::Image => "image",
            TileKind::Chart => "chart",
            TileKind::Plans => "plans",
            TileKind::Useless => "useless",
        }
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Displayed content of a tile.
///
/// List content keeps its order; most lists have three items so they stay
/// inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileContent {
    Text(String),
    List(SmallVec<[String; 3]>),
}

impl TileContent {
    /// Text content, or `None` for lists.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TileContent::Text(text) => Some(text),
            TileContent::List(_) => None,
        }
    }

    /// List items. Text content is viewed as a single item (or none if empty).
    #[must_use]
    pub fn items(&self) -> &[String] {
        match self {
            TileContent::Text(text) if text.is_empty() => &[],
            TileContent::Text(text) => std::slice::from_ref(text),
            TileContent::List(items) => items.as_slice(),
        }
    }
}

impl Default for TileContent {
    fn default() -> Self {
        TileContent::Text(String::new())
    }
}

/// A placeable content unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Unique identifier within the tile set.
    pub id: TileId,

    /// Stable name (e.g. `"useless1"`), used by renderers as a DOM-style key.
    pub name: String,

    pub kind: TileKind,

    pub content: TileContent,

    /// Whether the tile must be on the slide for the session to succeed.
    pub required: bool,
}

impl Tile {
    /// Create a tile with arbitrary content.
    #[must_use]
    pub fn new(
        id: TileId,
        name: impl Into<String>,
        kind: TileKind,
        content: TileContent,
        required: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            content,
            required,
        }
    }

    /// Create a tile with text content.
    #[must_use]
    pub fn text(
        id: TileId,
        name: impl Into<String>,
        kind: TileKind,
        text: impl Into<String>,
        required: bool,
    ) -> Self {
        Self::new(id, name, kind, TileContent::Text(text.into()), required)
    }

    /// Create a list tile. Lists are always of kind `List`.
    #[must_use]
    pub fn list<I, S>(id: TileId, name: impl Into<String>, items: I, required: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        Self::new(id, name, TileKind::List, TileContent::List(items), required)
    }
}
