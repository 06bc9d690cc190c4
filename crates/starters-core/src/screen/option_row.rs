//! The option row: one tappable glyph per catalog entry.

use crate::assets;
use crate::catalog::{Catalog, ImageRef, Item};
use crate::screen::appearance::Appearance;
use crate::state::SelectionState;

/// One tappable entry of the option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Position in the catalog; a tap dispatches `TapGlyph { index }`.
    pub index: usize,
    pub item: Item,
    pub selected: bool,
    /// Draw the pokeball tinted for contrast against a dark background.
    /// Never set on the selected glyph.
    pub tinted: bool,
}

impl Glyph {
    pub fn image(&self) -> ImageRef {
        if self.selected {
            ImageRef::new(assets::POKEBALL_SELECTED)
        } else {
            ImageRef::new(assets::POKEBALL_UNSELECTED)
        }
    }

    pub fn label(&self) -> &str {
        self.item.name()
    }
}

/// Build the glyphs for `catalog` in catalog order.
///
/// Equal items are never merged; every glyph equal to the selection is
/// marked selected.
pub fn option_row(
    catalog: &Catalog,
    selection: &SelectionState,
    appearance: Appearance,
) -> Vec<Glyph> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let selected = selection.is_selected(item);
            Glyph {
                index,
                item: item.clone(),
                selected,
                tinted: appearance.is_dark() && !selected,
            }
        })
        .collect()
}
