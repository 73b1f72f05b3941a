//! `RocksDB` storage layer for gamedge.
//!
//! This crate is the on-device half of the data layer. `RocksStore`
//! implements `GamesLocalDataStore`, `ArticlesLocalDataStore` and
//! `AuthLocalDataStore` from `gamedge-data`.
//!
//! # Architecture
//!
//! The storage uses the following column families:
//!
//! - `games`: Game records, keyed by big-endian game ID
//! - `games_by_release_date`: Index for release date range scans
//! - `articles`: News articles, keyed by big-endian article ID
//! - `auth`: The cached OAuth credentials
//!
//! Every write bumps a change counter. Live queries re-run when it moves and
//! only emit when their result actually changed.
//!
//! # Example
//!
//! ```no_run
//! use gamedge_core::{GameId, Pagination};
//! use gamedge_data::{Game, GamesLocalDataStore};
//! use gamedge_store::RocksStore;
//!
//! # async fn run() -> Result<(), gamedge_store::StoreError> {
//! let store = RocksStore::open("/tmp/gamedge-db")?;
//!
//! store.save_games(&[Game::new(GameId::new(1942), "The Witcher 3")]).await?;
//! let popular = store.observe_popular_games(Pagination::default());
//! # drop(popular);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod articles;
mod auth;
mod games;
pub mod keys;
pub mod live;
pub mod rocks;
pub mod schema;

pub use gamedge_data::StoreError;
pub use live::ChangeNotifier;
pub use rocks::{Result, RocksStore};
