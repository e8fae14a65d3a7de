use thiserror::Error;

/// Top-level error for all share-related operations
#[derive(Debug, Clone, Error)]
pub enum ShareError {
    #[error("Share link not found: {0}")]
    LinkNotFound(String),

    #[error("Share link owner not found: {0}")]
    OwnerNotFound(String),

    #[error("Share hash already exists: {0}")]
    HashAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
