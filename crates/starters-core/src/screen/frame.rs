use crate::screen::appearance::Appearance;
use crate::screen::detail_card::DetailCard;
use crate::screen::header::{Header, Logo};
use crate::screen::layout::Arrangement;
use crate::screen::option_row::Glyph;

/// Everything one render pass needs, computed from the selection, the
/// orientation and the appearance sampled for that pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenFrame {
    pub arrangement: Arrangement,
    pub appearance: Appearance,
    pub header: Header,
    pub logo: Logo,
    pub card: DetailCard,
    pub glyphs: Vec<Glyph>,
}

impl ScreenFrame {
    /// Indices of the glyphs drawn as selected.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.glyphs
            .iter()
            .filter(|g| g.selected)
            .map(|g| g.index)
            .collect()
    }
}
