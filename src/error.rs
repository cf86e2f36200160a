#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("quote cannot be null or empty (parameter `quote`)")]
    InvalidQuote,

    #[error("item at index {index} cannot be null (parameter `items`)")]
    InvalidItem { index: usize },
}

impl FormatError {
    /// Name of the argument that caused the error.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidQuote => "quote",
            Self::InvalidItem { .. } => "items",
        }
    }
}
