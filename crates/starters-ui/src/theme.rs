//! Colors and sizes for starters-ui.

use gpui::{Rgba, rgb};
use starters_core::Appearance;

// Spacing
pub const SPACE_2: f32 = 8.0;
pub const SPACE_4: f32 = 16.0;
pub const SPACE_8: f32 = 32.0;

// Text sizes
pub const TEXT_HEADER: f32 = 22.0;
pub const TEXT_CARD: f32 = 20.0;
pub const TEXT_GLYPH: f32 = 20.0;

// Images
pub const LOGO_HEIGHT: f32 = 100.0;
pub const CARD_IMAGE: f32 = 250.0;
pub const GLYPH_IMAGE: f32 = 40.0;

pub fn background(appearance: Appearance) -> Rgba {
    match appearance {
        Appearance::Light => rgb(0xfffbfe),
        Appearance::Dark => rgb(0x1c1b1f),
    }
}

pub fn text(appearance: Appearance) -> Rgba {
    match appearance {
        Appearance::Light => rgb(0x1c1b1f),
        Appearance::Dark => rgb(0xe6e1e5),
    }
}

/// Tint for unselected glyphs on a dark background.
pub fn glyph_tint() -> Rgba {
    rgb(0xffffff)
}
