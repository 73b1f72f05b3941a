//! Game entities and data store contracts for gamedge.
//!
//! This crate sits between the network client and the on-device store. It
//! defines:
//!
//! - **Entities**: `Game` and its nested value objects, and news `Article`s
//! - **Store contracts**: local and remote stores for games, news and
//!   credentials
//! - **Query semantics**: how categories, search and related-game reads select
//!   and order games
//! - **Store pairs**: `GamesDataStores`, `ArticlesDataStores` and
//!   `AuthDataStores`, which fetch from remote, persist locally and serve from
//!   local
//!
//! # Architecture
//!
//! ```text
//!                ┌──────────────────────────────┐
//!                │         *DataStores          │
//!                └──────────────┬───────────────┘
//!                  ┌────────────┴────────────┐
//!                  ▼                         ▼
//!        ┌───────────────────┐     ┌───────────────────┐
//!        │ *LocalDataStore   │     │ *RemoteDataStore  │
//!        │ (gamedge-store)   │     │ (igdb, gamespot)  │
//!        └───────────────────┘     └───────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod articles;
pub mod auth;
pub mod datastores;
pub mod entities;
pub mod error;
pub mod query;
pub mod release_dates;
pub mod stores;

pub use articles::Article;
pub use auth::OauthCredentials;
pub use datastores::{
    ArticlesLocalDataStore, ArticlesRemoteDataStore, ArticlesStream, AuthLocalDataStore,
    AuthRemoteDataStore, CredentialsProvider, GamesLocalDataStore, GamesRemoteDataStore,
    GamesStream,
};
pub use entities::{
    AgeRating, AgeRatingCategory, AgeRatingType, Company, Game, Genre, Image, InvolvedCompany,
    Keyword, Mode, Platform, PlayerPerspective, Theme, TimeToBeat, Website, WebsiteCategory,
};
pub use error::{DataError, Result, StoreError};
pub use query::GameCategory;
pub use release_dates::{ReleaseDatesProvider, ReleaseWindows, SystemReleaseDates};
pub use stores::{ArticlesDataStores, AuthDataStores, GamesDataStores};

pub use gamedge_core::{ArticleId, CompanyId, DomainError, GameId, Pagination};
