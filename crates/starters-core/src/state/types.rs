use serde::{Deserialize, Serialize};

use crate::catalog::Item;

/// Operations that change a screen's selection.
///
/// Commands use owned types so they can be logged, stored, and sent across
/// boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Replace the selection with `item`, whether or not it is in the catalog.
    SelectItem { item: Item },
    /// A tap on the option glyph at `index`; selects `catalog[index]`.
    TapGlyph { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_roundtrip() {
        let cmd = Command::SelectItem {
            item: Item::new("Charmander", "images/charmander.svg"),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }

    #[test]
    fn test_tap_glyph_wire_shape() {
        let json = serde_json::to_string(&Command::TapGlyph { index: 2 }).unwrap();
        assert_eq!(json, r#"{"TapGlyph":{"index":2}}"#);
    }
}
