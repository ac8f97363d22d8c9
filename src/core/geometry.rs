//! Screen-space geometry for drop hit-testing.
//!
//! Coordinates are whatever the renderer uses for pointer events (client
//! pixels in a browser). The engine only compares them.

use serde::{Deserialize, Serialize};

/// A pointer position.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of the slide region, edges included.
///
/// ```
/// use slide_rush::core::{Bounds, Point};
///
/// let slide = Bounds::new(100.0, 50.0, 500.0, 300.0);
/// assert!(slide.contains(Point::new(100.0, 300.0)));
/// assert!(!slide.contains(Point::new(99.9, 120.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds from an origin and a size, as layout engines report them.
    #[must_use]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Inclusive containment: a point on any edge is inside.
    ///
    /// NaN coordinates are never inside.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.left <= point.x
            && point.x <= self.right
            && self.top <= point.y
            && point.y <= self.bottom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}
