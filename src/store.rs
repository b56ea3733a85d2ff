//! Widget store: the dashboard's widgets, their properties, and selection.
//!
//! This module defines the record kept for every widget on the canvas
//! (`DashboardWidget`), a sparse-update type for incremental edits
//! (`PartialWidget`), and the store that owns all live widgets
//! (`WidgetStore`).
//!
//! The layout engine never reads records directly. It sees the geometry-only
//! snapshot returned by [`WidgetStore::widgets`], in insertion order, and the
//! controller writes computed positions back with
//! [`WidgetStore::set_widget_position`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::collision::{Widget, WidgetId};
use crate::consts::WIDGET_ID_PREFIX;
use crate::geom::Rect;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("widget not found: {0}")]
    NotFound(WidgetId),
    #[error("invalid widget size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("widget config must be a JSON object")]
    InvalidConfig,
}

/// A widget as kept by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardWidget {
    /// Footprint and id used by the layout engine.
    #[serde(flatten)]
    pub widget: Widget,
    /// Component type, e.g. `"line-chart"` or `"stat-card"`.
    pub kind: String,
    /// Title shown in the widget header.
    pub title: String,
    /// Open-ended per-kind settings (theme, data source, etc.).
    pub config: serde_json::Value,
}

impl DashboardWidget {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.widget.id
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.widget.rect()
    }
}

/// Fields for a widget that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWidget {
    pub kind: String,
    pub title: String,
    pub rect: Rect,
    pub config: serde_json::Value,
}

/// Sparse update for a widget. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialWidget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Config keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

impl PartialWidget {
    /// A position-only update.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    /// A footprint update covering position and size.
    #[must_use]
    pub fn footprint(rect: Rect) -> Self {
        Self { x: Some(rect.x), y: Some(rect.y), width: Some(rect.width), height: Some(rect.height), ..Default::default() }
    }
}

fn validate_size(width: f64, height: f64) -> Result<(), StoreError> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(StoreError::InvalidSize { width, height })
    }
}

fn fresh_id() -> WidgetId {
    format!("{WIDGET_ID_PREFIX}{}", Uuid::new_v4())
}

// =============================================================================
// STORE
// =============================================================================

/// In-memory store of dashboard widgets, kept in insertion order.
#[derive(Debug, Default)]
pub struct WidgetStore {
    widgets: Vec<DashboardWidget>,
    selected: Option<WidgetId>,
}

impl WidgetStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.widgets.iter().position(|w| w.id() == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut DashboardWidget, StoreError> {
        self.widgets
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))
    }

    /// Add a new widget under a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` for non-positive or non-finite dimensions.
    pub fn add(&mut self, new: NewWidget) -> Result<&DashboardWidget, StoreError> {
        validate_size(new.rect.width, new.rect.height)?;
        let record = DashboardWidget {
            widget: Widget::new(fresh_id(), new.rect),
            kind: new.kind,
            title: new.title,
            config: new.config,
        };
        info!(id = %record.id(), kind = %record.kind, x = record.widget.x, y = record.widget.y, "widget added");
        let index = self.widgets.len();
        self.widgets.push(record);
        Ok(&self.widgets[index])
    }

    /// Insert or replace a widget. An existing widget with the same id keeps
    /// its slot in the ordering.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` for non-positive or non-finite dimensions; the
    /// store is left unchanged.
    pub fn insert(&mut self, record: DashboardWidget) -> Result<(), StoreError> {
        validate_size(record.widget.width, record.widget.height)?;
        match self.position_of(record.id()) {
            Some(index) => self.widgets[index] = record,
            None => self.widgets.push(record),
        }
        Ok(())
    }

    /// Remove a widget by id, returning it if it was present. Clears the
    /// selection if it pointed at the removed widget.
    pub fn remove(&mut self, id: &str) -> Option<DashboardWidget> {
        let index = self.position_of(id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        info!(%id, "widget removed");
        Some(self.widgets.remove(index))
    }

    /// Return a reference to a widget by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DashboardWidget> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    /// Move a widget to `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no widget has this id.
    pub fn set_widget_position(&mut self, id: &str, x: f64, y: f64) -> Result<(), StoreError> {
        let record = self.get_mut(id)?;
        record.widget.x = x;
        record.widget.y = y;
        Ok(())
    }

    /// Apply a partial update to an existing widget.
    ///
    /// The update is validated before anything is written, so a rejected
    /// update leaves the widget untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, `InvalidSize` if the resulting
    /// size is not positive, and `InvalidConfig` if `config` is not an object.
    pub fn apply_partial(&mut self, id: &str, partial: &PartialWidget) -> Result<(), StoreError> {
        let record = self.get_mut(id)?;
        validate_size(
            partial.width.unwrap_or(record.widget.width),
            partial.height.unwrap_or(record.widget.height),
        )?;
        let incoming = match &partial.config {
            Some(config) => Some(config.as_object().ok_or(StoreError::InvalidConfig)?),
            None => None,
        };

        if let Some(x) = partial.x {
            record.widget.x = x;
        }
        if let Some(y) = partial.y {
            record.widget.y = y;
        }
        if let Some(w) = partial.width {
            record.widget.width = w;
        }
        if let Some(h) = partial.height {
            record.widget.height = h;
        }
        if let Some(title) = &partial.title {
            record.title.clone_from(title);
        }
        if let Some(incoming) = incoming {
            if !record.config.is_object() {
                record.config = serde_json::json!({});
            }
            if let Some(existing) = record.config.as_object_mut() {
                for (k, v) in incoming {
                    if v.is_null() {
                        existing.remove(k);
                    } else {
                        existing.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        Ok(())
    }

    /// Replace all widgets with a full snapshot and clear the selection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` for the first record with a non-positive or
    /// non-finite size. Nothing is replaced in that case.
    pub fn load_snapshot(&mut self, records: Vec<DashboardWidget>) -> Result<(), StoreError> {
        for record in &records {
            validate_size(record.widget.width, record.widget.height)?;
        }
        info!(count = records.len(), "snapshot loaded");
        self.widgets = records;
        self.selected = None;
        Ok(())
    }

    /// Geometry-only snapshot for the layout engine, in insertion order.
    #[must_use]
    pub fn widgets(&self) -> Vec<Widget> {
        self.widgets.iter().map(|w| w.widget.clone()).collect()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[DashboardWidget] {
        &self.widgets
    }

    /// Select a widget, or clear the selection with `None`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when selecting an id that is not in the store.
    pub fn select(&mut self, id: Option<&str>) -> Result<(), StoreError> {
        if let Some(id) = id {
            if self.position_of(id).is_none() {
                return Err(StoreError::NotFound(id.to_owned()));
            }
        }
        self.selected = id.map(str::to_owned);
        Ok(())
    }

    /// The currently selected widget id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Number of widgets currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` if the store contains no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
