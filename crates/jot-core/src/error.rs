//! Domain error type shared by the authentication and note services.

use thiserror::Error;

/// Error produced by the core services.
///
/// Authentication failures carry one fixed message regardless of whether the
/// email was unknown, the password was wrong, or a token was missing or
/// stale. Callers that need to distinguish those cases for logging should do
/// so before constructing the error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A request field failed validation (empty email, empty text, ...).
    #[error("{0}")]
    Validation(String),

    /// Registration attempted with an email that already has an account.
    #[error("email already registered")]
    DuplicateUser,

    /// Credentials or token could not be verified.
    #[error("invalid credentials")]
    Authentication,

    /// The requested note does not exist or belongs to someone else.
    #[error("note not found")]
    NotFound,

    /// Storage or hashing failure not caused by the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Build a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an internal error from any displayable message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result alias used throughout the core services.
pub type Result<T> = std::result::Result<T, Error>;
