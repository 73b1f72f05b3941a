//! Data store contracts.
//!
//! Each feature has a local store (on-device persistence) and a remote store
//! (the network API). The local store mirrors the remote one so a composition
//! can fetch, persist, then serve from local uniformly.

pub mod articles;
pub mod auth;
pub mod games;

pub use articles::{ArticlesLocalDataStore, ArticlesRemoteDataStore, ArticlesStream};
pub use auth::{AuthLocalDataStore, AuthRemoteDataStore, CredentialsProvider};
pub use games::{GamesLocalDataStore, GamesRemoteDataStore, GamesStream};
