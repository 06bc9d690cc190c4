use crate::catalog::{ImageRef, Item};
use crate::strings::StringProvider;

/// Enlarged display of the selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub image: ImageRef,
    /// Item name in uppercase.
    pub title: String,
    pub description: String,
}

impl DetailCard {
    pub fn new(selected: &Item, strings: &dyn StringProvider) -> Self {
        Self {
            image: selected.image().clone(),
            title: selected.name().to_uppercase(),
            description: strings.detail_description(selected.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::ScreenStrings;

    #[test]
    fn test_card_shows_uppercase_name_and_item_image() {
        let item = Item::new("Charmander", "images/charmander.svg");
        let card = DetailCard::new(&item, &ScreenStrings::new());
        assert_eq!(card.title, "CHARMANDER");
        assert_eq!(card.image.as_str(), "images/charmander.svg");
        assert_eq!(card.description, "Pokemon selecionado é o Charmander");
    }

    #[test]
    fn test_uppercase_handles_accents() {
        let card = DetailCard::new(&Item::named("Flabébé"), &ScreenStrings::new());
        assert_eq!(card.title, "FLABÉBÉ");
    }
}
