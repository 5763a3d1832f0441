//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was empty after trimming.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid handle format.
    #[error("invalid handle: {0}")]
    InvalidHandle(#[from] frontino_core::HandleError),

    /// Invalid credentials (wrong password or unknown handle).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Handle already registered.
    #[error("handle already taken")]
    HandleTaken,

    /// The caller lacks the required role.
    #[error("access denied")]
    AccessDenied,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
