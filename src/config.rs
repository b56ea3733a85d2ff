//! Layout configuration: grid pitch, canvas size, and minimum widget size.

use crate::consts::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GRID_SIZE, MIN_GRID_SIZE, MIN_WIDGET_HEIGHT, MIN_WIDGET_WIDTH,
};
use crate::geom::CanvasSize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but is not a number.
    #[error("config parse failed: {var}={value}")]
    Parse { var: String, value: String },

    /// A value parsed but is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub grid_size: f64,
    pub canvas: CanvasSize,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            canvas: CanvasSize::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            min_width: MIN_WIDGET_WIDTH,
            min_height: MIN_WIDGET_HEIGHT,
        }
    }
}

impl LayoutConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `DASHGRID_GRID_SIZE`: default 20
    /// - `DASHGRID_CANVAS_WIDTH`: default 1200
    /// - `DASHGRID_CANVAS_HEIGHT`: default 800
    /// - `DASHGRID_MIN_WIDTH`: default 100
    /// - `DASHGRID_MIN_HEIGHT`: default 80
    ///
    /// # Errors
    ///
    /// Returns `Parse` for non-numeric values and `Invalid` for values that
    /// fail [`LayoutConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup, falling back to defaults
    /// for absent keys.
    ///
    /// # Errors
    ///
    /// See [`LayoutConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            grid_size: parse_f64(&lookup, "DASHGRID_GRID_SIZE", defaults.grid_size)?,
            canvas: CanvasSize::new(
                parse_f64(&lookup, "DASHGRID_CANVAS_WIDTH", defaults.canvas.width)?,
                parse_f64(&lookup, "DASHGRID_CANVAS_HEIGHT", defaults.canvas.height)?,
            ),
            min_width: parse_f64(&lookup, "DASHGRID_MIN_WIDTH", defaults.min_width)?,
            min_height: parse_f64(&lookup, "DASHGRID_MIN_HEIGHT", defaults.min_height)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every value is finite and positive, and that `grid_size` is at
    /// least [`MIN_GRID_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns `Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("grid_size", self.grid_size),
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
            ("min_width", self.min_width),
            ("min_height", self.min_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.grid_size < MIN_GRID_SIZE {
            let grid = self.grid_size;
            return Err(ConfigError::Invalid(format!("grid_size must be at least {MIN_GRID_SIZE}, got {grid}")));
        }
        Ok(())
    }
}

fn parse_f64(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Parse { var: var.to_owned(), value: raw.clone() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
