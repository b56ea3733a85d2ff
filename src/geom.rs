//! Canvas geometry: points, axis-aligned rectangles, and the overlap primitives
//! every other module builds on.
//!
//! All coordinates are canvas pixels with the origin at the top-left corner and
//! `y` increasing downward. Rectangles never rotate.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by `delta` on both axes.
    #[must_use]
    pub fn offset(self, delta: Point) -> Self {
        Self { x: self.x + delta.x, y: self.y + delta.y }
    }
}

/// Axis-aligned bounding box.
///
/// `width` and `height` are expected to be positive; the pure functions in
/// this crate do not check it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// Same size, moved so its top-left corner sits at `origin`.
    #[must_use]
    pub fn at(&self, origin: Point) -> Self {
        Self { x: origin.x, y: origin.y, ..*self }
    }

    /// Area in square pixels.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Pixel dimensions of the drop area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Largest legal `(x, y)` for the top-left corner of a `width` x `height`
    /// box. Never negative, even when the box is larger than the canvas.
    #[must_use]
    pub fn max_origin(&self, width: f64, height: f64) -> Point {
        Point { x: (self.width - width).max(0.0), y: (self.height - height).max(0.0) }
    }

    /// The larger of the two dimensions.
    #[must_use]
    pub fn longest_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Whether `a` and `b` share interior area.
///
/// The comparisons are strict, so rectangles that only touch along an edge or
/// at a corner do not overlap and widgets may sit edge to edge.
#[must_use]
pub fn rectangles_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.x >= b.right() || a.right() <= b.x || a.y >= b.bottom() || a.bottom() <= b.y)
}

/// Area of the intersection of `a` and `b`, or `0.0` when they do not overlap.
#[must_use]
pub fn overlap_area(a: &Rect, b: &Rect) -> f64 {
    if !rectangles_overlap(a, b) {
        return 0.0;
    }
    let overlap_x = (a.right().min(b.right()) - a.x.max(b.x)).max(0.0);
    let overlap_y = (a.bottom().min(b.bottom()) - a.y.max(b.y)).max(0.0);
    overlap_x * overlap_y
}

/// Whether `rect` lies entirely inside the canvas.
#[must_use]
pub fn is_within_bounds(rect: &Rect, canvas: CanvasSize) -> bool {
    rect.x >= 0.0 && rect.y >= 0.0 && rect.right() <= canvas.width && rect.bottom() <= canvas.height
}
