//! Core types and utilities for gamedge.
//!
//! This crate provides the foundational types shared by every gamedge crate:
//!
//! - **Identifiers**: Strongly-typed IDs for games, companies and articles
//! - **Pagination**: The offset/limit descriptor passed through to data stores
//! - **Error types**: The domain error taxonomy and the mapping from API errors
//!
//! # Example
//!
//! ```
//! use gamedge_core::{ApiError, DomainError, ErrorMapper, GameId};
//!
//! let game_id: GameId = "1942".parse().unwrap();
//! assert_eq!(game_id.get(), 1942);
//!
//! let api_error = ApiError::Http { status: 404, message: "Not Found".to_string() };
//! let domain_error = ErrorMapper.map_to_domain_error(&api_error);
//! assert_eq!(domain_error, DomainError::ClientError("Not Found".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod error;
pub mod ids;
pub mod pagination;

pub use api::{ApiError, ApiErrorFlags, ErrorMapper, InvariantViolation};
pub use error::{DomainError, Result};
pub use ids::{ArticleId, CompanyId, GameId, IdError};
pub use pagination::Pagination;
