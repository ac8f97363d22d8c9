//! Drag tracking and drop hit-testing.

use crate::core::{Bounds, Point, TileId};

/// What a drop should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropDecision {
    /// The pointer is on the slide; place this tile.
    Place(TileId),
    /// The pointer missed the slide. Nothing changes, even for a tile that
    /// is already placed.
    Outside,
    /// Nothing is being dragged.
    NoActiveDrag,
}

/// Tracks the single tile currently being dragged.
///
/// Starting a new drag replaces the previous one.
///
/// ```
/// use slide_rush::controller::{DragHandler, DropDecision};
/// use slide_rush::core::{Bounds, Point, TileId};
///
/// let slide = Bounds::new(0.0, 0.0, 100.0, 100.0);
/// let mut drag = DragHandler::new();
///
/// drag.begin_drag(TileId::new(3));
/// assert_eq!(
///     drag.evaluate_drop(Point::new(50.0, 50.0), slide),
///     DropDecision::Place(TileId::new(3))
/// );
/// assert_eq!(drag.evaluate_drop(Point::new(150.0, 50.0), slide), DropDecision::Outside);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragHandler {
    active: Option<TileId>,
}

impl DragHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `tile` as the drag source, replacing any previous one.
    pub fn begin_drag(&mut self, tile: TileId) {
        self.active = Some(tile);
    }

    /// Forget the drag source. Safe to call with no drag active.
    pub fn end_drag(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn active(&self) -> Option<TileId> {
        self.active
    }

    /// Decide what a release at `pointer` means. Pure; does not end the drag.
    #[must_use]
    pub fn evaluate_drop(&self, pointer: Point, slide: Bounds) -> DropDecision {
        match self.active {
            None => DropDecision::NoActiveDrag,
            Some(tile) if slide.contains(pointer) => DropDecision::Place(tile),
            Some(_) => DropDecision::Outside,
        }
    }
}
