//! IGDB remote data stores for gamedge.
//!
//! This crate provides:
//!
//! - **`IgdbGamesDataStore`**: `GamesRemoteDataStore` over the IGDB v4 API
//! - **`TwitchAuthDataStore`**: `AuthRemoteDataStore` issuing app access
//!   tokens through the Twitch client credentials grant
//! - **`EntityMapper`**: wire-to-domain conversion of games
//!
//! Every failed call is first classified into an `ApiError` and then mapped
//! to the `DomainError` returned to callers.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gamedge_data::{AuthDataStores, GamesRemoteDataStore, Pagination};
//! use gamedge_igdb::{IgdbClient, IgdbConfig, IgdbGamesDataStore, TwitchAuthDataStore};
//! use gamedge_store::RocksStore;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IgdbConfig::new("client-id", "client-secret");
//! let store = Arc::new(RocksStore::open("/tmp/gamedge-db")?);
//! let auth = AuthDataStores::new(store, Arc::new(TwitchAuthDataStore::new(config.clone())?));
//!
//! let igdb = IgdbGamesDataStore::new(IgdbClient::new(config)?, Arc::new(auth));
//! let _popular = igdb.get_popular_games(Pagination::default()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod auth;
pub mod client;
pub mod config;
pub mod datastore;
pub mod entities;
mod error;
pub mod mapper;
pub mod query;

pub use auth::TwitchAuthDataStore;
pub use client::IgdbClient;
pub use config::IgdbConfig;
pub use datastore::IgdbGamesDataStore;
pub use mapper::EntityMapper;
pub use query::{Query, SortOrder};
