//! GameSpot news remote data store for gamedge.
//!
//! `GamespotArticlesDataStore` implements `ArticlesRemoteDataStore` over the
//! GameSpot `articles` resource. Failures go through the same `ApiError` to
//! `DomainError` mapping as the IGDB stores.
//!
//! # Example
//!
//! ```no_run
//! use gamedge_data::{ArticlesRemoteDataStore, Pagination};
//! use gamedge_gamespot::{GamespotArticlesDataStore, GamespotConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gamespot = GamespotArticlesDataStore::new(GamespotConfig::new("api-key"))?;
//! let _news = gamespot.get_articles(Pagination::default()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod datastore;
pub mod entities;
mod error;
pub mod mapper;

pub use config::GamespotConfig;
pub use datastore::GamespotArticlesDataStore;
pub use mapper::ArticleMapper;
