//! Items and the fixed catalog offered for selection.

pub mod errors;
pub mod types;

pub use errors::CatalogError;
pub use types::{Catalog, ImageRef, Item};

use crate::assets;

/// The built-in starter catalog.
///
/// Names are kept exactly as the source data spells them.
pub fn starters() -> Catalog {
    Catalog {
        items: vec![
            Item::new("Bulbassaur", assets::BULBASSAUR),
            Item::new("Charmander", assets::CHARMANDER),
            Item::new("Squirtle", assets::SQUIRTLE),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = starters();
        let names: Vec<&str> = catalog.iter().map(Item::name).collect();
        assert_eq!(names, vec!["Bulbassaur", "Charmander", "Squirtle"]);
    }

    #[test]
    fn test_builtin_catalog_images_are_known_assets() {
        for item in starters().iter() {
            assert!(
                assets::ALL.contains(&item.image().as_str()),
                "{} has unknown asset {}",
                item.name(),
                item.image()
            );
        }
    }
}
