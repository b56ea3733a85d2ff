//! Placement search: find the nearest free spot for a widget on a bounded canvas.
//!
//! DESIGN
//! ======
//! The requested position is first clamped into the canvas. If that baseline
//! is free it is returned as-is, so a drop into open space costs a single
//! collision check. Otherwise an expanding ring search samples eight
//! neighbours per radius (four axis-aligned, then four diagonal) in a fixed
//! order, stepping the radius by the grid pitch up to the canvas's longest
//! side. The first free candidate wins.
//!
//! When every ring is exhausted the baseline is returned anyway, flagged as
//! [`PlacementOutcome::Saturated`], so callers always get coordinates and can
//! still tell that the result overlaps.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collision::{Widget, check_collision};
use crate::consts::MIN_GRID_SIZE;
use crate::geom::{CanvasSize, Point, Rect};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    #[error("grid size must be finite and at least 1, got {0}")]
    InvalidGridSize(f64),
}

/// How a placement was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOutcome {
    /// The clamped request was already free.
    Free,
    /// The request collided and the ring search found a free spot.
    Relocated,
    /// No free spot exists within the search radius; the clamped request is
    /// returned and still overlaps at least one widget.
    Saturated,
}

/// Result of [`find_best_position`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub outcome: PlacementOutcome,
}

impl Placement {
    /// Top-left corner of the placement.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// Whether the placement is free of overlap.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.outcome != PlacementOutcome::Saturated
    }
}

/// Unit offsets sampled at each radius: right, left, down, up, bottom-right,
/// bottom-left, top-right, top-left.
const RING_DIRECTIONS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
];

// =============================================================================
// SEARCH
// =============================================================================

/// Clamp `origin` so a box of `size` stays inside the canvas.
fn clamp_origin(origin: Point, size: &Rect, canvas: CanvasSize) -> Point {
    let max = canvas.max_origin(size.width, size.height);
    Point { x: origin.x.min(max.x).max(0.0), y: origin.y.min(max.y).max(0.0) }
}

/// Find the nearest position for `rect` that does not overlap any widget.
///
/// `exclude_id` names the widget being moved, if any, so it never blocks
/// itself. Results always satisfy `0 <= x <= max(0, canvas.width - width)`
/// and the same on `y`.
///
/// # Errors
///
/// Returns `InvalidGridSize` if `grid_size` is not finite or is below
/// [`MIN_GRID_SIZE`]. That bounds the search at `longest_side / MIN_GRID_SIZE`
/// rings.
pub fn find_best_position(
    rect: &Rect,
    widgets: &[Widget],
    canvas: CanvasSize,
    grid_size: f64,
    exclude_id: Option<&str>,
) -> Result<Placement, PlacementError> {
    if !grid_size.is_finite() || grid_size < MIN_GRID_SIZE {
        return Err(PlacementError::InvalidGridSize(grid_size));
    }

    let baseline = clamp_origin(rect.origin(), rect, canvas);
    if !check_collision(&rect.at(baseline), widgets, exclude_id) {
        return Ok(Placement { x: baseline.x, y: baseline.y, outcome: PlacementOutcome::Free });
    }

    let limit = canvas.longest_side();
    let mut radius = grid_size;
    while radius <= limit {
        for (dx, dy) in RING_DIRECTIONS {
            let raw = Point { x: baseline.x + dx * radius, y: baseline.y + dy * radius };
            let candidate = clamp_origin(raw, rect, canvas);
            if !check_collision(&rect.at(candidate), widgets, exclude_id) {
                debug!(radius, x = candidate.x, y = candidate.y, "relocated placement");
                return Ok(Placement { x: candidate.x, y: candidate.y, outcome: PlacementOutcome::Relocated });
            }
        }
        radius += grid_size;
    }

    debug!(x = baseline.x, y = baseline.y, widgets = widgets.len(), "canvas saturated");
    Ok(Placement { x: baseline.x, y: baseline.y, outcome: PlacementOutcome::Saturated })
}
