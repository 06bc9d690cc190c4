use tracing::debug;

use crate::catalog::{Catalog, Item};

/// Holds the single currently-selected item for one screen session.
///
/// Always holds a value: it starts at the catalog's first item and only
/// changes through [`SelectionState::select`].
#[derive(Clone, Debug)]
pub struct SelectionState {
    current: Item,
}

impl SelectionState {
    /// Start a selection at the catalog's first item.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            current: catalog.first().clone(),
        }
    }

    /// The selected item.
    pub fn current(&self) -> &Item {
        &self.current
    }

    /// Replace the selection and return the previous one.
    ///
    /// No catalog membership check: an item outside the catalog is accepted
    /// and simply never matches a glyph.
    pub fn select(&mut self, item: Item) -> Item {
        debug!(
            event = "core.selection.select",
            previous = self.current.name(),
            next = item.name()
        );
        std::mem::replace(&mut self.current, item)
    }

    /// Check whether `item` equals the current selection by value.
    pub fn is_selected(&self, item: &Item) -> bool {
        &self.current == item
    }
}
