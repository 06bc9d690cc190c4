//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.starters/config.toml` (global user preferences)
//! 3. **Project config** - `./.starters/config.toml` (project-specific overrides)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::{
    AppearanceConfig, AssetsConfig, StartersConfig, StringsConfig, WindowConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".starters";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.starters/config.toml`)
/// 3. Project config (`./.starters/config.toml`)
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<StartersConfig, ConfigError> {
    let mut layers = Vec::new();
    match user_config_path() {
        Ok(path) => layers.push(path),
        Err(e) => debug!(event = "core.config.user_config_skipped", error = %e),
    }
    if let Ok(cwd) = std::env::current_dir() {
        layers.push(cwd.join(CONFIG_DIR).join(CONFIG_FILE));
    }
    load_layers(&layers)
}

/// Load and merge the given config files in order, then validate.
///
/// Files that do not exist are skipped.
pub fn load_layers(paths: &[PathBuf]) -> Result<StartersConfig, ConfigError> {
    let mut config = StartersConfig::default();

    for path in paths {
        match load_config_file(path) {
            Ok(layer) => {
                debug!(event = "core.config.layer_loaded", path = %path.display());
                config = merge_configs(config, layer);
            }
            Err(e) if e.is_file_not_found() => {
                debug!(event = "core.config.layer_missing", path = %path.display());
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    info!(
        event = "core.config.loaded",
        layers = paths.len(),
        custom_catalog = config.catalog.is_some()
    );
    Ok(config)
}

fn user_config_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home_dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<StartersConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields in the override replace base values only if present.
/// A catalog in the override replaces the base catalog wholesale.
pub fn merge_configs(base: StartersConfig, override_config: StartersConfig) -> StartersConfig {
    StartersConfig {
        window: WindowConfig {
            width: override_config.window.width.or(base.window.width),
            height: override_config.window.height.or(base.window.height),
        },
        appearance: AppearanceConfig {
            mode: override_config.appearance.mode.or(base.appearance.mode),
        },
        strings: StringsConfig {
            header: override_config.strings.header.or(base.strings.header),
        },
        assets: AssetsConfig {
            dir: override_config.assets.dir.or(base.assets.dir),
        },
        catalog: override_config.catalog.or(base.catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::AppearanceMode;
    use std::fs;

    fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = load_layers(&[
            temp_dir.path().join("user.toml"),
            temp_dir.path().join("project.toml"),
        ])
        .unwrap();
        assert!(config.catalog.is_none());
        assert_eq!(config.window.width(), 420.0);
    }

    #[test]
    fn test_project_overrides_user() {
        let temp_dir = tempfile::tempdir().unwrap();
        let user = write_config(
            temp_dir.path(),
            "user.toml",
            r#"
[window]
width = 600.0
height = 900.0

[appearance]
mode = "dark"
"#,
        );
        let project = write_config(
            temp_dir.path(),
            "project.toml",
            r#"
[window]
width = 1200.0

[strings]
header = "Starters"
"#,
        );

        let config = load_layers(&[user, project]).unwrap();
        assert_eq!(config.window.width(), 1200.0); // From project
        assert_eq!(config.window.height(), 900.0); // From user
        assert_eq!(config.appearance.mode(), AppearanceMode::Dark); // From user
        assert_eq!(config.strings.header.as_deref(), Some("Starters")); // From project
    }

    #[test]
    fn test_parse_error_is_reported_with_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let broken = write_config(temp_dir.path(), "broken.toml", "invalid toml [[[");

        let err = load_layers(&[broken.clone()]).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains(&broken.display().to_string()));
    }

    #[test]
    fn test_invalid_merged_config_fails_validation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "config.toml", "catalog = []\n");

        let err = load_layers(&[path]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_project_catalog_replaces_user_catalog() {
        let user: StartersConfig = toml::from_str(
            r#"
[[catalog]]
name = "Treecko"

[[catalog]]
name = "Torchic"
"#,
        )
        .unwrap();
        let project: StartersConfig = toml::from_str(
            r#"
[[catalog]]
name = "Mudkip"
"#,
        )
        .unwrap();

        let merged = merge_configs(user.clone(), project);
        let names: Vec<&str> = merged
            .catalog
            .as_ref()
            .unwrap()
            .iter()
            .map(|i| i.name())
            .collect();
        assert_eq!(names, vec!["Mudkip"]);

        // No catalog in the override keeps the base one
        let kept = merge_configs(user, StartersConfig::default());
        assert_eq!(kept.catalog.unwrap().len(), 2);
    }

    #[test]
    fn test_toml_parsing_edge_cases() {
        let empty_config: StartersConfig = toml::from_str("").unwrap();
        assert!(empty_config.appearance.mode.is_none());

        let partial: StartersConfig = toml::from_str(
            r#"
[appearance]
mode = "light"
"#,
        )
        .unwrap();
        assert_eq!(partial.appearance.mode(), AppearanceMode::Light);
        assert_eq!(partial.window.height(), 800.0);
    }
}
