//! API error classification and mapping to domain errors.
//!
//! Network clients classify every failed call into one of four categories
//! (`ApiError`). The `ErrorMapper` turns those into the `DomainError` values
//! consumed by the rest of the application.
//!
//! Some producers still report the category as a record of boolean flags
//! (`ApiErrorFlags`). Such a record is only meaningful when exactly one flag is
//! set; anything else is a bug in the producer and is surfaced as an
//! `InvariantViolation` instead of being folded into `DomainError::Unknown`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DomainError;

/// A classified failure reported by a network client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server failed to handle a valid request (5xx).
    #[error("server error (HTTP {status})")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// The server rejected the request (non-success, non-5xx).
    #[error("HTTP error {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Detail extracted from the response.
        message: String,
    },

    /// The request did not complete at the transport level.
    #[error("network error: {0}")]
    Network(String),

    /// Any other failure, such as an undecodable response body.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Returns `true` for server-side failures.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Returns `true` for rejected requests.
    #[must_use]
    pub const fn is_http_error(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Returns `true` for transport failures.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns `true` for unclassified failures.
    #[must_use]
    pub const fn is_unknown_error(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// A flag-style API error record, as emitted by producers that predate
/// `ApiError`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorFlags {
    /// Set for server-side failures.
    pub is_server_error: bool,
    /// Set for rejected requests.
    pub is_http_error: bool,
    /// Set for transport failures.
    pub is_network_error: bool,
    /// Set for unclassified failures.
    pub is_unknown_error: bool,
    /// Detail for `is_http_error`.
    pub http_error_message: String,
    /// Detail for `is_network_error`.
    pub network_error_message: String,
    /// Detail for `is_unknown_error`.
    pub unknown_error_message: String,
}

impl ApiErrorFlags {
    /// Number of classification flags that are set.
    #[must_use]
    pub fn flags_set(&self) -> usize {
        [
            self.is_server_error,
            self.is_http_error,
            self.is_network_error,
            self.is_unknown_error,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }
}

/// An API error record that does not have exactly one classification flag set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not map the api error to a domain error: {flags_set} classification flags set, expected exactly one")]
pub struct InvariantViolation {
    /// Number of flags found on the offending record.
    pub flags_set: usize,
}

impl TryFrom<ApiErrorFlags> for ApiError {
    type Error = InvariantViolation;

    fn try_from(flags: ApiErrorFlags) -> Result<Self, Self::Error> {
        let flags_set = flags.flags_set();
        if flags_set != 1 {
            return Err(InvariantViolation { flags_set });
        }

        // Flag records carry no status code.
        if flags.is_server_error {
            Ok(Self::Server { status: 0 })
        } else if flags.is_http_error {
            Ok(Self::Http {
                status: 0,
                message: flags.http_error_message,
            })
        } else if flags.is_network_error {
            Ok(Self::Network(flags.network_error_message))
        } else {
            Ok(Self::Unknown(flags.unknown_error_message))
        }
    }
}

/// Maps API errors to domain errors.
///
/// Stateless; the constructor exists so call sites can hold a mapper next to
/// their other collaborators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorMapper;

impl ErrorMapper {
    /// Create a new mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Map a classified API error to its domain error.
    #[must_use]
    pub fn map_to_domain_error(&self, api_error: &ApiError) -> DomainError {
        match api_error {
            ApiError::Server { .. } => DomainError::ServiceUnavailable,
            ApiError::Http { message, .. } => DomainError::ClientError(message.clone()),
            ApiError::Network(message) => DomainError::NetworkError(message.clone()),
            ApiError::Unknown(message) => DomainError::Unknown(message.clone()),
        }
    }

    /// Map a flag-style API error record to its domain error.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the record does not have exactly one
    /// classification flag set.
    pub fn map_flags_to_domain_error(
        &self,
        flags: ApiErrorFlags,
    ) -> Result<DomainError, InvariantViolation> {
        match ApiError::try_from(flags) {
            Ok(api_error) => Ok(self.map_to_domain_error(&api_error)),
            Err(violation) => {
                tracing::error!(
                    flags_set = violation.flags_set,
                    "API error record violates the single-flag invariant"
                );
                Err(violation)
            }
        }
    }
}

impl From<ApiError> for DomainError {
    fn from(api_error: ApiError) -> Self {
        ErrorMapper.map_to_domain_error(&api_error)
    }
}
