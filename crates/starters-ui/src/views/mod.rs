//! View components for starters-ui.
//!
//! - `main_view` - Root view that owns the screen and lays out its slots
//! - `header` - Title text and logo
//! - `detail_card` - The enlarged selected starter
//! - `option_row` - Tappable pokeball glyphs

pub mod detail_card;
pub mod header;
pub mod main_view;
pub mod option_row;

pub use main_view::MainView;
