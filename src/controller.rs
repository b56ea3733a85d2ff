//! Drop, move, and resize handling on top of the pure layout functions.
//!
//! The host's drag-and-drop layer calls these entry points when a gesture
//! ends. Each one snaps the raw coordinates to the grid, asks the placement
//! search for a free spot, writes the result into the [`WidgetStore`], and
//! returns an [`Action`] describing the change for the host to persist.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::collision::{WidgetId, check_collision, find_most_overlapping_widget};
use crate::config::{ConfigError, LayoutConfig};
use crate::geom::{CanvasSize, Point, Rect};
use crate::grid::{clamp_to_grid, snap_size};
use crate::placement::{Placement, PlacementError, PlacementOutcome, find_best_position};
use crate::store::{DashboardWidget, NewWidget, PartialWidget, StoreError, WidgetStore};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Changes returned to the host for persistence.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    WidgetCreated(DashboardWidget),
    WidgetUpdated { id: WidgetId, fields: PartialWidget },
    WidgetDeleted { id: WidgetId },
}

/// A component library entry being dropped onto the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTemplate {
    pub kind: String,
    pub title: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// Live feedback while a widget hovers over the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct DropPreview {
    /// The hovered footprint after grid snapping.
    pub snapped: Rect,
    /// Whether `snapped` overlaps another widget.
    pub colliding: bool,
    /// The widget `snapped` overlaps most, if any.
    pub most_overlapping: Option<WidgetId>,
    /// Where the widget would land if released now.
    pub placement: Placement,
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Owns the widget store and applies layout rules to every mutation.
#[derive(Debug, Default)]
pub struct LayoutController {
    store: WidgetStore,
    config: LayoutConfig,
}

impl LayoutController {
    /// Create a controller with an empty store.
    ///
    /// # Errors
    ///
    /// Returns `Config` if `config` does not validate.
    pub fn new(config: LayoutConfig) -> Result<Self, ControllerError> {
        config.validate()?;
        Ok(Self { store: WidgetStore::new(), config })
    }

    #[must_use]
    pub fn store(&self) -> &WidgetStore {
        &self.store
    }

    #[must_use]
    pub fn store_mut(&mut self) -> &mut WidgetStore {
        &mut self.store
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Update the canvas size after the host's drop area is resized.
    ///
    /// # Errors
    ///
    /// Returns `Config` if either dimension is not positive.
    pub fn set_canvas_size(&mut self, canvas: CanvasSize) -> Result<(), ControllerError> {
        let next = LayoutConfig { canvas, ..self.config };
        next.validate()?;
        self.config = next;
        Ok(())
    }

    fn snap_origin(&self, point: Point) -> Point {
        Point {
            x: clamp_to_grid(point.x, self.config.grid_size, 0.0),
            y: clamp_to_grid(point.y, self.config.grid_size, 0.0),
        }
    }

    fn place(&self, rect: &Rect, exclude_id: Option<&str>) -> Result<Placement, ControllerError> {
        let widgets = self.store.widgets();
        let placement = find_best_position(rect, &widgets, self.config.canvas, self.config.grid_size, exclude_id)?;
        match placement.outcome {
            PlacementOutcome::Free => {}
            PlacementOutcome::Relocated => {
                debug!(from_x = rect.x, from_y = rect.y, x = placement.x, y = placement.y, "placement relocated");
            }
            PlacementOutcome::Saturated => {
                warn!(x = placement.x, y = placement.y, widgets = widgets.len(), "no free position; placing with overlap");
            }
        }
        Ok(placement)
    }

    fn record(&self, id: &str) -> Result<&DashboardWidget, ControllerError> {
        self.store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()).into())
    }

    // --- Gestures ---

    /// Add a new widget from the component library at `drop_point`.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the template size is not positive.
    pub fn drop_component(&mut self, template: &ComponentTemplate, drop_point: Point) -> Result<Action, ControllerError> {
        let origin = self.snap_origin(drop_point);
        let rect = Rect { x: origin.x, y: origin.y, width: template.width, height: template.height };
        let placement = self.place(&rect, None)?;
        let record = self.store.add(NewWidget {
            kind: template.kind.clone(),
            title: template.title.clone(),
            rect: rect.at(placement.origin()),
            config: template.config.clone(),
        })?;
        Ok(Action::WidgetCreated(record.clone()))
    }

    /// Move an existing widget by `delta`, the pointer travel of the drag.
    ///
    /// # Errors
    ///
    /// Returns `Store(NotFound)` for an unknown id.
    pub fn move_widget(&mut self, id: &str, delta: Point) -> Result<Action, ControllerError> {
        let current = self.record(id)?.rect();
        let origin = self.snap_origin(current.origin().offset(delta));
        let placement = self.place(&current.at(origin), Some(id))?;
        self.store.set_widget_position(id, placement.x, placement.y)?;
        Ok(Action::WidgetUpdated { id: id.to_owned(), fields: PartialWidget::position(placement.x, placement.y) })
    }

    /// Resize a widget by `delta` from its bottom-right corner.
    ///
    /// The new size is snapped and floored at the configured minimum. If the
    /// larger footprint now overlaps a neighbour the widget is relocated.
    ///
    /// # Errors
    ///
    /// Returns `Store(NotFound)` for an unknown id.
    pub fn resize_widget(&mut self, id: &str, delta: Point) -> Result<Action, ControllerError> {
        let current = self.record(id)?.rect();
        let (width, height) = snap_size(
            current.width + delta.x,
            current.height + delta.y,
            self.config.grid_size,
            self.config.min_width,
            self.config.min_height,
        );
        let resized = Rect { width, height, ..current };
        let placement = self.place(&resized, Some(id))?;
        let fields = PartialWidget::footprint(resized.at(placement.origin()));
        self.store.apply_partial(id, &fields)?;
        Ok(Action::WidgetUpdated { id: id.to_owned(), fields })
    }

    /// Remove a widget.
    ///
    /// # Errors
    ///
    /// Returns `Store(NotFound)` for an unknown id.
    pub fn remove_widget(&mut self, id: &str) -> Result<Action, ControllerError> {
        self.store
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        Ok(Action::WidgetDeleted { id: id.to_owned() })
    }

    // --- Queries ---

    /// Collision feedback for a footprint hovering at `rect`.
    ///
    /// Pass the dragged widget's id as `exclude_id` when moving an existing
    /// widget.
    ///
    /// # Errors
    ///
    /// Returns `Placement` if the configured grid size is unusable.
    pub fn preview(&self, rect: Rect, exclude_id: Option<&str>) -> Result<DropPreview, ControllerError> {
        let snapped = rect.at(self.snap_origin(rect.origin()));
        let widgets = self.store.widgets();
        let colliding = check_collision(&snapped, &widgets, exclude_id);
        let most_overlapping = find_most_overlapping_widget(&snapped, &widgets, exclude_id).map(|w| w.id.clone());
        let placement = find_best_position(&snapped, &widgets, self.config.canvas, self.config.grid_size, exclude_id)?;
        Ok(DropPreview { snapped, colliding, most_overlapping, placement })
    }
}
