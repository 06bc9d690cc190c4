use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogError, Item};
use crate::screen::appearance::Appearance;
use crate::screen::detail_card::DetailCard;
use crate::screen::frame::ScreenFrame;
use crate::screen::header::{Header, Logo};
use crate::screen::layout::{Arrangement, Orientation};
use crate::screen::option_row::option_row;
use crate::state::{Command, DispatchError, Event, SelectionState, Store};
use crate::strings::StringProvider;

/// Root of the starter screen.
///
/// Owns the catalog and the selection for the lifetime of the screen. Views
/// receive read-only frames and ask for changes through [`Store::dispatch`].
#[derive(Debug, Clone)]
pub struct StarterScreen {
    catalog: Catalog,
    selection: SelectionState,
}

impl StarterScreen {
    /// Create a screen selecting the catalog's first item.
    pub fn new(catalog: Catalog) -> Self {
        let selection = SelectionState::new(&catalog);
        info!(
            event = "core.screen.created",
            items = catalog.len(),
            selected = selection.current().name()
        );
        Self { catalog, selection }
    }

    /// Create a screen from raw items, refusing an empty list.
    pub fn from_items(items: Vec<Item>) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::from_items(items)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current(&self) -> &Item {
        self.selection.current()
    }

    /// Compose the render input for one pass.
    pub fn frame(
        &self,
        orientation: Orientation,
        appearance: Appearance,
        strings: &dyn StringProvider,
    ) -> ScreenFrame {
        ScreenFrame {
            arrangement: Arrangement::for_orientation(orientation),
            appearance,
            header: Header::new(strings),
            logo: Logo::new(strings),
            card: DetailCard::new(self.selection.current(), strings),
            glyphs: option_row(&self.catalog, &self.selection, appearance),
        }
    }

    fn apply_selection(&mut self, item: Item) -> Vec<Event> {
        let current = item.clone();
        let previous = self.selection.select(item);
        info!(
            event = "core.selection.changed",
            previous = previous.name(),
            current = current.name()
        );
        vec![Event::SelectionChanged { previous, current }]
    }
}

impl Store for StarterScreen {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.screen.dispatch_started", command = ?cmd);

        match cmd {
            Command::SelectItem { item } => Ok(self.apply_selection(item)),
            Command::TapGlyph { index } => {
                let Some(item) = self.catalog.get(index).cloned() else {
                    let len = self.catalog.len();
                    warn!(
                        event = "core.screen.tap_out_of_range",
                        index = index,
                        len = len
                    );
                    return Err(DispatchError::GlyphOutOfRange { index, len });
                };
                Ok(self.apply_selection(item))
            }
        }
    }
}
