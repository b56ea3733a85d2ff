//! Collision queries of a candidate rectangle against placed widgets.
//!
//! Widgets are read as an ordered slice. Order never changes whether a
//! candidate collides; it only decides which widget wins a tie in
//! [`find_most_overlapping_widget`].

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Rect, overlap_area, rectangles_overlap};

/// Identifier of a widget on the canvas.
pub type WidgetId = String;

/// A widget footprint: a rectangle plus the id that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Widget {
    #[must_use]
    pub fn new(id: impl Into<WidgetId>, rect: Rect) -> Self {
        Self { id: id.into(), x: rect.x, y: rect.y, width: rect.width, height: rect.height }
    }

    /// The widget's bounding box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

/// An empty `exclude_id` excludes nothing.
fn is_excluded(widget: &Widget, exclude_id: Option<&str>) -> bool {
    exclude_id.is_some_and(|id| !id.is_empty() && widget.id == id)
}

/// Whether `rect` overlaps any widget other than `exclude_id`.
///
/// Pass the id of the widget being moved as `exclude_id` so it does not
/// collide with its own previous position. `Some("")` behaves like `None`.
#[must_use]
pub fn check_collision(rect: &Rect, widgets: &[Widget], exclude_id: Option<&str>) -> bool {
    widgets
        .iter()
        .any(|w| !is_excluded(w, exclude_id) && rectangles_overlap(rect, &w.rect()))
}

/// The widget sharing the largest overlap area with `rect`.
///
/// Ties keep the earliest widget in the slice. Returns `None` when nothing
/// overlaps.
#[must_use]
pub fn find_most_overlapping_widget<'a>(rect: &Rect, widgets: &'a [Widget], exclude_id: Option<&str>) -> Option<&'a Widget> {
    let mut best: Option<&Widget> = None;
    let mut best_area = 0.0;
    for widget in widgets {
        if is_excluded(widget, exclude_id) {
            continue;
        }
        let area = overlap_area(rect, &widget.rect());
        if area > best_area {
            best_area = area;
            best = Some(widget);
        }
    }
    best
}
