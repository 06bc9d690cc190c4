use crate::assets;
use crate::catalog::ImageRef;
use crate::strings::StringProvider;

/// Static screen title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
}

impl Header {
    pub fn new(strings: &dyn StringProvider) -> Self {
        Self {
            title: strings.header().to_string(),
        }
    }
}

/// Static decorative logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub image: ImageRef,
    pub description: String,
}

impl Logo {
    pub fn new(strings: &dyn StringProvider) -> Self {
        Self {
            image: ImageRef::new(assets::LOGO),
            description: strings.logo_description().to_string(),
        }
    }
}
