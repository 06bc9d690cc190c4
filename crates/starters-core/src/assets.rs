//! Logical asset paths shared by the core view models and the UI asset source.
//!
//! Paths are relative to the asset root and resolved by the UI's gpui `AssetSource`.

pub const POKEBALL_SELECTED: &str = "images/pokeball_selected.svg";
pub const POKEBALL_UNSELECTED: &str = "images/pokeball_unselected.svg";
pub const LOGO: &str = "images/logo_pokemon.svg";

pub const BULBASSAUR: &str = "images/bulbassaur.svg";
pub const CHARMANDER: &str = "images/charmander.svg";
pub const SQUIRTLE: &str = "images/squirtle.svg";

/// Every asset the built-in screen references.
pub const ALL: &[&str] = &[
    POKEBALL_SELECTED,
    POKEBALL_UNSELECTED,
    LOGO,
    BULBASSAUR,
    CHARMANDER,
    SQUIRTLE,
];
