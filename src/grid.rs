//! Grid snapping: quantize coordinates and sizes to the grid pitch.
//!
//! A pitch of zero disables snapping rather than dividing by zero, so callers
//! can pass a "grid off" setting straight through.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::geom::Point;

/// Round `value` to the nearest multiple of `grid_size`.
///
/// Ties round half away from zero (`15` on a pitch of `20` becomes `20`).
/// A `grid_size` of zero returns `value` unchanged.
#[must_use]
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size == 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Snap `value` to the grid, then raise it to at least `min`.
#[must_use]
pub fn clamp_to_grid(value: f64, grid_size: f64, min: f64) -> f64 {
    snap_to_grid(value, grid_size).max(min)
}

/// Snap both coordinates of `point`.
#[must_use]
pub fn snap_point(point: Point, grid_size: f64) -> Point {
    Point { x: snap_to_grid(point.x, grid_size), y: snap_to_grid(point.y, grid_size) }
}

/// Snap a resize result to the grid, enforcing minimum dimensions.
///
/// Returns `(width, height)`.
#[must_use]
pub fn snap_size(width: f64, height: f64, grid_size: f64, min_width: f64, min_height: f64) -> (f64, f64) {
    (clamp_to_grid(width, grid_size, min_width), clamp_to_grid(height, grid_size, min_height))
}
