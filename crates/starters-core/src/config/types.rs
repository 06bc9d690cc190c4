//! Configuration type definitions for Starters.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [window]
//! width = 420.0
//! height = 800.0
//!
//! [appearance]
//! mode = "system"
//!
//! [assets]
//! dir = "/home/me/starter-art"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::Item;
use crate::screen::AppearanceMode;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.starters/config.toml`
/// 2. Project config: `./.starters/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StartersConfig {
    /// Initial window size
    #[serde(default)]
    pub window: WindowConfig,

    /// Light/dark preference
    #[serde(default)]
    pub appearance: AppearanceConfig,

    /// Display string overrides
    #[serde(default)]
    pub strings: StringsConfig,

    /// Where to look for image assets before the embedded set
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Replacement catalog; the built-in starters are used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<Item>>,
}

/// Initial window size in logical pixels.
///
/// Width smaller than height opens the screen in portrait.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WindowConfig {
    /// Default: 420.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Default: 800.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppearanceConfig {
    /// One of: system, light, dark. Default: system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<AppearanceMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StringsConfig {
    /// Header title shown above the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetsConfig {
    /// Directory searched before the embedded assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starters_config_serialization() {
        let config = StartersConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: StartersConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.window.width, parsed.window.width);
        assert!(parsed.catalog.is_none());
    }

    #[test]
    fn test_window_config_serialization() {
        let config = WindowConfig {
            width: Some(1024.0),
            height: None,
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("width = 1024.0"));
        assert!(!toml_str.contains("height"));
    }

    #[test]
    fn test_full_config_deserialize() {
        let toml_str = r#"
[window]
width = 900.0
height = 500.0

[appearance]
mode = "light"

[assets]
dir = "/opt/starters/assets"

[[catalog]]
name = "Totodile"
"#;
        let config: StartersConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.window.width, Some(900.0));
        assert_eq!(config.appearance.mode, Some(AppearanceMode::Light));
        assert_eq!(
            config.assets.dir,
            Some(PathBuf::from("/opt/starters/assets"))
        );
        assert_eq!(config.catalog.unwrap()[0].name(), "Totodile");
    }
}
