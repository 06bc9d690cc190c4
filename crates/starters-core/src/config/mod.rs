//! # Configuration System
//!
//! Hierarchical TOML configuration for Starters.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.starters/config.toml` (global user preferences)
//! 3. **Project config** - `./.starters/config.toml` (project-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.starters/config.toml
//! [window]
//! width = 420.0
//! height = 800.0
//!
//! [appearance]
//! mode = "dark"
//!
//! [strings]
//! header = "Escolha seu Pokémon Inicial"
//!
//! [[catalog]]
//! name = "Bulbassaur"
//! image = "images/bulbassaur.svg"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use starters_core::config::StartersConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StartersConfig::load_hierarchy()?;
//!     let catalog = config.catalog()?;
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{AppearanceConfig, AssetsConfig, StartersConfig, StringsConfig, WindowConfig};
pub use validation::validate_config;

use crate::catalog::{self, Catalog, CatalogError};
use crate::errors::ConfigError;
use crate::strings::ScreenStrings;

impl StartersConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// The catalog for a new screen: the configured one, or the built-in starters.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(items) => Catalog::from_items(items.clone()),
            None => Ok(catalog::starters()),
        }
    }

    /// Display strings with any configured header override applied.
    pub fn strings(&self) -> ScreenStrings {
        match &self.strings.header {
            Some(header) => ScreenStrings::with_header(header.clone()),
            None => ScreenStrings::new(),
        }
    }
}
