use crate::errors::StartersError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one item")]
    Empty,
}

impl StartersError for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Empty => "CATALOG_EMPTY",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, CatalogError::Empty)
    }
}
