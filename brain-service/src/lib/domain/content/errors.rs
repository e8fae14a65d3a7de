use thiserror::Error;

/// Error for ContentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all content-related operations
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    #[error("Invalid content ID: {0}")]
    InvalidContentId(#[from] ContentIdError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
