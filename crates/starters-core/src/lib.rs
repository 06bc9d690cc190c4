//! starters-core: Core library for the starter picker screen
//!
//! Holds the catalog, the single-item selection, and the pure view models the
//! UI renders every pass. Nothing here depends on a windowing toolkit.
//!
//! # Main Entry Points
//!
//! - [`screen`] - `StarterScreen`, the root that owns the selection, and its frames
//! - [`state`] - Selection state and the `Store` command/event seam
//! - [`catalog`] - Items and the built-in starter catalog
//! - [`config`] - Configuration management

pub mod assets;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod logging;
pub mod screen;
pub mod state;
pub mod strings;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Catalog, CatalogError, ImageRef, Item};
pub use config::StartersConfig;
pub use errors::{ConfigError, StartersError, StartersResult};
pub use screen::{
    Appearance, AppearanceMode, Arrangement, DetailCard, Glyph, Header, Logo, Orientation,
    ScreenFrame, Slot, StarterScreen,
};
pub use state::{Command, DispatchError, Event, SelectionState, Store};
pub use strings::{ScreenStrings, StringProvider};

// Re-export logging initialization
pub use logging::init_logging;
