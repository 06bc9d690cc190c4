use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assets;
use crate::catalog::errors::CatalogError;

/// Opaque reference to an image, resolved by the UI's asset source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

fn default_image() -> ImageRef {
    ImageRef::new(assets::POKEBALL_UNSELECTED)
}

/// One selectable creature.
///
/// Equality is by value: two items with the same name and image are
/// interchangeable for selection matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(default = "default_image")]
    image: ImageRef,
}

impl Item {
    pub fn new(name: impl Into<String>, image: impl Into<ImageRef>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }

    /// Item with the unselected pokeball as its image.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: default_image(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

/// Ordered, non-empty, read-only list of items for one screen session.
///
/// Duplicates are kept; the catalog never deduplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub(super) items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, refusing an empty list.
    pub fn from_items(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { items })
    }

    /// First item; always present.
    pub fn first(&self) -> &Item {
        &self.items[0]
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
