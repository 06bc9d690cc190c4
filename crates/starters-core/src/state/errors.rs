use crate::errors::StartersError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("No option glyph at index {index} (catalog has {len} items)")]
    GlyphOutOfRange { index: usize, len: usize },
}

impl StartersError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::GlyphOutOfRange { .. } => "GLYPH_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_out_of_range_error() {
        let error = DispatchError::GlyphOutOfRange { index: 5, len: 3 };
        assert_eq!(
            error.to_string(),
            "No option glyph at index 5 (catalog has 3 items)"
        );
        assert_eq!(error.error_code(), "GLYPH_OUT_OF_RANGE");
        assert!(!error.is_user_error());
    }
}
