//! Display strings for the screen.
//!
//! The screen ships Portuguese text. `StringProvider` is the seam for swapping
//! it; `ScreenStrings` is the stock implementation, with an optional header
//! override from configuration.

/// Source of every user-visible string on the screen.
pub trait StringProvider {
    /// Title shown by the header.
    fn header(&self) -> &str;

    /// Accessibility description of the logo image.
    fn logo_description(&self) -> &str;

    /// Accessibility description of the detail card image for `name`.
    fn detail_description(&self, name: &str) -> String;
}

pub const DEFAULT_HEADER: &str = "Escolha seu Pokémon Inicial";
const LOGO_DESCRIPTION: &str = "Pokemon Logo";

#[derive(Debug, Clone, Default)]
pub struct ScreenStrings {
    header_override: Option<String>,
}

impl ScreenStrings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the header title.
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header_override: Some(header.into()),
        }
    }
}

impl StringProvider for ScreenStrings {
    fn header(&self) -> &str {
        self.header_override.as_deref().unwrap_or(DEFAULT_HEADER)
    }

    fn logo_description(&self) -> &str {
        LOGO_DESCRIPTION
    }

    fn detail_description(&self, name: &str) -> String {
        format!("Pokemon selecionado é o {}", name)
    }
}
