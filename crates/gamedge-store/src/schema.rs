//! Database schema definitions and column families.
//!
//! This module defines the column families used in `RocksDB` storage.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Primary game records, keyed by `game_id`.
    pub const GAMES: &str = "games";

    /// Index: games by release date, keyed by `release_date || game_id`.
    ///
    /// Games without a release date are not indexed.
    pub const GAMES_BY_RELEASE_DATE: &str = "games_by_release_date";

    /// News articles, keyed by `article_id`.
    pub const ARTICLES: &str = "articles";

    /// Authentication records, keyed by a fixed name.
    pub const AUTH: &str = "auth";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::GAMES, cf::GAMES_BY_RELEASE_DATE, cf::ARTICLES, cf::AUTH]
}
