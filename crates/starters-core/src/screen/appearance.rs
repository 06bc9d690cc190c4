use serde::{Deserialize, Serialize};

/// Visual environment the screen renders under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}

/// Configured appearance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// Follow the host window.
    #[default]
    System,
    Light,
    Dark,
}

impl AppearanceMode {
    /// Resolve against the appearance the host reports this render pass.
    pub fn resolve(self, system: Appearance) -> Appearance {
        match self {
            AppearanceMode::System => system,
            AppearanceMode::Light => Appearance::Light,
            AppearanceMode::Dark => Appearance::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_mode_follows_host() {
        assert_eq!(
            AppearanceMode::System.resolve(Appearance::Dark),
            Appearance::Dark
        );
        assert_eq!(
            AppearanceMode::System.resolve(Appearance::Light),
            Appearance::Light
        );
    }

    #[test]
    fn test_forced_modes_ignore_host() {
        assert_eq!(
            AppearanceMode::Light.resolve(Appearance::Dark),
            Appearance::Light
        );
        assert_eq!(
            AppearanceMode::Dark.resolve(Appearance::Light),
            Appearance::Dark
        );
    }

    #[test]
    fn test_mode_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: AppearanceMode,
        }
        let parsed: Wrapper = toml::from_str(r#"mode = "dark""#).unwrap();
        assert_eq!(parsed.mode, AppearanceMode::Dark);
        assert!(toml::from_str::<Wrapper>(r#"mode = "sepia""#).is_err());
    }
}
