//! Shared numeric constants for the layout engine.

// ── Grid ────────────────────────────────────────────────────────

/// Default grid pitch in canvas pixels.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Finest pitch the ring search and `LayoutConfig` accept.
pub const MIN_GRID_SIZE: f64 = 1.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Canvas width used until the host reports the real drop area.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;

/// Canvas height used until the host reports the real drop area.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;

// ── Widgets ─────────────────────────────────────────────────────

/// Smallest width a resize may shrink a widget to.
pub const MIN_WIDGET_WIDTH: f64 = 100.0;

/// Smallest height a resize may shrink a widget to.
pub const MIN_WIDGET_HEIGHT: f64 = 80.0;

/// Prefix for store-assigned widget ids.
pub const WIDGET_ID_PREFIX: &str = "widget-";
