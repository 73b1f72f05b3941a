//! Domain error types for gamedge.
//!
//! Every API-backed feature reports failures with `DomainError`, independent
//! of the transport that produced them.

use thiserror::Error;

/// A result type using `DomainError`.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Normalized errors for remote operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The remote service failed systemically (5xx class).
    #[error("service unavailable")]
    ServiceUnavailable,

    /// The request was rejected (4xx class). Carries the server's detail.
    #[error("client error: {0}")]
    ClientError(String),

    /// The request never completed (connectivity, timeout).
    #[error("network error: {0}")]
    NetworkError(String),

    /// Anything else.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl DomainError {
    /// Returns `true` if retrying the same request later might succeed.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable | Self::NetworkError(_))
    }

    /// The message carried by the error, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::ServiceUnavailable => None,
            Self::ClientError(message) | Self::NetworkError(message) | Self::Unknown(message) => {
                Some(message.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retriable_errors() {
        assert!(DomainError::ServiceUnavailable.is_retriable());
        assert!(DomainError::NetworkError("timeout".to_string()).is_retriable());
        assert!(!DomainError::ClientError("Not Found".to_string()).is_retriable());
        assert!(!DomainError::Unknown("?".to_string()).is_retriable());
    }

    #[test]
    fn display_includes_message() {
        let error = DomainError::ClientError("Not Found".to_string());
        assert_eq!(error.to_string(), "client error: Not Found");
        assert_eq!(error.message(), Some("Not Found"));
        assert_eq!(DomainError::ServiceUnavailable.message(), None);
    }
}
