//! Catalog error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested market does not exist.
    #[error("market not found")]
    NotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
