//! Default values for optional configuration fields.

use crate::config::types::{AppearanceConfig, WindowConfig};
use crate::screen::AppearanceMode;

/// Portrait phone-like width.
pub const DEFAULT_WINDOW_WIDTH: f32 = 420.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

impl WindowConfig {
    pub fn width(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_WINDOW_WIDTH)
    }

    pub fn height(&self) -> f32 {
        self.height.unwrap_or(DEFAULT_WINDOW_HEIGHT)
    }
}

impl AppearanceConfig {
    pub fn mode(&self) -> AppearanceMode {
        self.mode.unwrap_or_default()
    }
}
