//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A user with this email already exists.
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl From<StoreError> for jot_core::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(_) => jot_core::Error::DuplicateUser,
            other => jot_core::Error::internal(other.to_string()),
        }
    }
}
