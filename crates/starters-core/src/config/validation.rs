use crate::config::types::StartersConfig;
use crate::errors::ConfigError;

/// Validate a loaded configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` when:
/// - a window dimension is not a positive finite number
/// - `[[catalog]]` is present but lists no items
/// - a catalog item or the header override is blank
pub fn validate_config(config: &StartersConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("window.width", config.window.width),
        ("window.height", config.window.height),
    ] {
        if let Some(v) = value
            && !(v.is_finite() && v > 0.0)
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{name} must be a positive number, got {v}"),
            });
        }
    }

    if let Some(items) = &config.catalog {
        if items.is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: "catalog must list at least one item".to_string(),
            });
        }
        if let Some(position) = items.iter().position(|i| i.name().trim().is_empty()) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("catalog item {position} has an empty name"),
            });
        }
    }

    if config
        .strings
        .header
        .as_deref()
        .is_some_and(|h| h.trim().is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "strings.header must not be blank".to_string(),
        });
    }

    Ok(())
}
