//! Asset source for starters-ui.
//!
//! Serves the SVGs compiled into the binary, preferring files from the
//! configured assets directory when present.

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use gpui::{AssetSource, SharedString};
use starters_core::assets;

const EMBEDDED: &[(&str, &[u8])] = &[
    (
        assets::POKEBALL_SELECTED,
        include_bytes!("../assets/images/pokeball_selected.svg"),
    ),
    (
        assets::POKEBALL_UNSELECTED,
        include_bytes!("../assets/images/pokeball_unselected.svg"),
    ),
    (
        assets::LOGO,
        include_bytes!("../assets/images/logo_pokemon.svg"),
    ),
    (
        assets::BULBASSAUR,
        include_bytes!("../assets/images/bulbassaur.svg"),
    ),
    (
        assets::CHARMANDER,
        include_bytes!("../assets/images/charmander.svg"),
    ),
    (
        assets::SQUIRTLE,
        include_bytes!("../assets/images/squirtle.svg"),
    ),
];

pub struct StarterAssets {
    override_dir: Option<PathBuf>,
}

impl StarterAssets {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    fn embedded(path: &str) -> Option<&'static [u8]> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, bytes)| *bytes)
    }
}

impl AssetSource for StarterAssets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if let Some(dir) = &self.override_dir {
            let candidate = dir.join(path);
            if candidate.is_file() {
                let bytes = std::fs::read(&candidate).with_context(|| {
                    format!("could not read asset at \"{}\"", candidate.display())
                })?;
                tracing::debug!(event = "ui.assets.loaded_override", path = path);
                return Ok(Some(Cow::Owned(bytes)));
            }
        }

        let bytes = Self::embedded(path).map(Cow::Borrowed);
        if bytes.is_none() {
            tracing::warn!(event = "ui.assets.not_found", path = path);
        }
        Ok(bytes)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(EMBEDDED
            .iter()
            .filter(|(name, _)| name.starts_with(path))
            .map(|(name, _)| SharedString::from(*name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_core_asset_is_embedded() {
        for path in assets::ALL {
            assert!(
                StarterAssets::embedded(path).is_some(),
                "missing embedded asset {path}"
            );
        }
    }

    #[test]
    fn test_load_embedded() {
        let source = StarterAssets::new(None);
        let bytes = source.load(assets::LOGO).unwrap().unwrap();
        assert!(bytes.starts_with(b"<svg"));
    }

    #[test]
    fn test_unknown_asset_is_none() {
        let source = StarterAssets::new(None);
        assert!(source.load("images/missingno.svg").unwrap().is_none());
    }

    #[test]
    fn test_override_dir_takes_precedence() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("images")).unwrap();
        std::fs::write(temp_dir.path().join(assets::SQUIRTLE), b"<svg id=\"custom\"/>").unwrap();

        let source = StarterAssets::new(Some(temp_dir.path().to_path_buf()));
        let bytes = source.load(assets::SQUIRTLE).unwrap().unwrap();
        assert_eq!(bytes.as_ref(), b"<svg id=\"custom\"/>");

        // Files missing from the override dir fall back to the embedded set
        let logo = source.load(assets::LOGO).unwrap().unwrap();
        assert!(logo.starts_with(b"<svg"));
    }

    #[test]
    fn test_list_filters_by_prefix() {
        let source = StarterAssets::new(None);
        let listed = source.list("images/pokeball").unwrap();
        assert_eq!(listed.len(), 2);
        assert!(source.list("fonts/").unwrap().is_empty());
    }
}
