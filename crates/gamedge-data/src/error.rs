//! Error types for the data layer.

use gamedge_core::DomainError;
use thiserror::Error;

/// A result type using `DataError`.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur in local storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested record was not found.
    #[error("record not found")]
    NotFound,

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors from operations that combine the remote and local stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The remote store failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The local store failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl DataError {
    /// Collapse into a `DomainError` for callers that only speak the domain
    /// taxonomy.
    #[must_use]
    pub fn into_domain_error(self) -> DomainError {
        match self {
            Self::Domain(error) => error,
            Self::Store(error) => DomainError::Unknown(error.to_string()),
        }
    }
}
