//! `RocksDB` storage implementation.
//!
//! This module provides `RocksStore` and its synchronous record operations.
//! The data store traits in [`crate::games`] and [`crate::auth`] are built on
//! top of them.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use gamedge_core::{ArticleId, GameId, Pagination};
use parking_lot::Mutex;
use gamedge_data::{
    Article, Game, GameCategory, OauthCredentials, ReleaseDatesProvider, StoreError,
    SystemReleaseDates,
};
use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, Direction, IteratorMode,
    MultiThreaded, Options, WriteBatch,
};

use crate::keys;
use crate::live::ChangeNotifier;
use crate::schema::{all_column_families, cf};

/// A result type using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// RocksDB-backed storage implementation.
///
/// Cloning is cheap and every clone shares the same database and change
/// notifications.
#[derive(Clone)]
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    changes: Arc<ChangeNotifier>,
    release_dates: Arc<dyn ReleaseDatesProvider>,
    /// Held across the read-modify-write of an upsert so index cleanup
    /// always sees the record it replaces.
    write_lock: Arc<Mutex<()>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_release_dates(path, Arc::new(SystemReleaseDates))
    }

    /// Open a database whose category queries use the given release windows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open_with_release_dates<P: AsRef<Path>>(
        path: P,
        release_dates: Arc<dyn ReleaseDatesProvider>,
    ) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self {
            db: Arc::new(db),
            changes: Arc::new(ChangeNotifier::new()),
            release_dates,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    pub(crate) fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    // =========================================================================
    // Game Operations
    // =========================================================================

    /// Insert or replace games, keeping the release date index in sync.
    ///
    /// All games are written in one batch. If the same ID appears more than
    /// once, the last occurrence wins. Concurrent calls are serialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn put_games(&self, games: &[Game]) -> Result<()> {
        if games.is_empty() {
            return Ok(());
        }

        let cf_games = self.cf(cf::GAMES)?;
        let cf_by_date = self.cf(cf::GAMES_BY_RELEASE_DATE)?;

        let latest: BTreeMap<GameId, &Game> = games.iter().map(|game| (game.id, game)).collect();

        let guard = self.write_lock.lock();

        let mut batch = WriteBatch::default();
        for game in latest.values() {
            let game_key = keys::game_key(game.id);

            // Drop the old index entry if the release date moved
            let old_release_date = self.get_game(game.id)?.and_then(|old| old.release_date);
            if let Some(old) = old_release_date {
                if Some(old) != game.release_date {
                    batch.delete_cf(&cf_by_date, keys::release_date_key(old, game.id));
                }
            }

            batch.put_cf(&cf_games, game_key, Self::serialize(*game)?);
            if let Some(release_date) = game.release_date {
                batch.put_cf(&cf_by_date, keys::release_date_key(release_date, game.id), b"");
            }
        }

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;
        drop(guard);

        tracing::debug!(count = latest.len(), "Saved games");
        self.changes.notify();

        Ok(())
    }

    /// Get a game by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_game(&self, game_id: GameId) -> Result<Option<Game>> {
        let cf = self.cf(cf::GAMES)?;

        self.db
            .get_cf(&cf, keys::game_key(game_id))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    /// Get every stored game among `ids`, in the order given. Missing IDs are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_games(&self, ids: &[GameId]) -> Result<Vec<Game>> {
        let cf = self.cf(cf::GAMES)?;

        let mut games = Vec::with_capacity(ids.len());
        let lookups = self
            .db
            .multi_get_cf(ids.iter().map(|id| (&cf, keys::game_key(*id))));

        for result in lookups {
            let value = result.map_err(|e| StoreError::Database(e.to_string()))?;
            if let Some(data) = value {
                games.push(Self::deserialize(&data)?);
            }
        }

        Ok(games)
    }

    /// List all stored games, in ID order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_all_games(&self) -> Result<Vec<Game>> {
        let cf = self.cf(cf::GAMES)?;

        let mut games = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            games.push(Self::deserialize(&value)?);
        }

        Ok(games)
    }

    /// List games released strictly after `after` and, if given, strictly
    /// before `before`, in release date order.
    ///
    /// Index entries that no longer match the stored record are skipped, so
    /// each game appears at most once.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_games_released_between(
        &self,
        after: i64,
        before: Option<i64>,
    ) -> Result<Vec<Game>> {
        let Some(start) = after.checked_add(1) else {
            return Ok(Vec::new());
        };

        let cf_games = self.cf(cf::GAMES)?;
        let cf_by_date = self.cf(cf::GAMES_BY_RELEASE_DATE)?;
        let start_key = keys::release_date_prefix(start);
        let iter = self
            .db
            .iterator_cf(&cf_by_date, IteratorMode::From(&start_key, Direction::Forward));

        let mut entries = Vec::new();
        for item in iter {
            let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            let (release_date, game_id) = keys::split_release_date_key(&key)
                .map_err(|e| StoreError::Database(format!("corrupt release date index: {e}")))?;

            // Stop once we're past the window
            if before.is_some_and(|before| release_date >= before) {
                break;
            }
            entries.push((release_date, game_id));
        }

        let lookups = self.db.multi_get_cf(
            entries
                .iter()
                .map(|(_, game_id)| (&cf_games, keys::game_key(*game_id))),
        );

        let mut games = Vec::with_capacity(entries.len());
        for ((release_date, _), result) in entries.into_iter().zip(lookups) {
            let value = result.map_err(|e| StoreError::Database(e.to_string()))?;
            let Some(data) = value else { continue };

            let game: Game = Self::deserialize(&data)?;
            if game.release_date == Some(release_date) {
                games.push(game);
            }
        }

        Ok(games)
    }

    /// Run a category query against the current release windows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn query_category(
        &self,
        category: GameCategory,
        pagination: Pagination,
    ) -> Result<Vec<Game>> {
        let windows = self.release_dates.windows();
        let candidates = self.list_games_released_between(
            category.min_release_date(&windows),
            category.max_release_date(&windows),
        )?;
        Ok(category.select(candidates, &windows, pagination))
    }

    // =========================================================================
    // Article Operations
    // =========================================================================

    /// Insert or replace articles by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn put_articles(&self, articles: &[Article]) -> Result<()> {
        if articles.is_empty() {
            return Ok(());
        }

        let cf = self.cf(cf::ARTICLES)?;

        let mut batch = WriteBatch::default();
        for article in articles {
            batch.put_cf(&cf, keys::article_key(article.id), Self::serialize(article)?);
        }

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(count = articles.len(), "Saved articles");
        self.changes.notify();

        Ok(())
    }

    /// Get an article by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_article(&self, article_id: ArticleId) -> Result<Option<Article>> {
        let cf = self.cf(cf::ARTICLES)?;

        self.db
            .get_cf(&cf, keys::article_key(article_id))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    /// List all stored articles, in ID order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_all_articles(&self) -> Result<Vec<Article>> {
        let cf = self.cf(cf::ARTICLES)?;

        let mut articles = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            articles.push(Self::deserialize(&value)?);
        }

        Ok(articles)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Replace the cached OAuth credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn put_credentials(&self, credentials: &OauthCredentials) -> Result<()> {
        let cf = self.cf(cf::AUTH)?;
        let value = Self::serialize(credentials)?;

        self.db
            .put_cf(&cf, keys::OAUTH_CREDENTIALS_KEY, value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    /// Get the cached OAuth credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_credentials(&self) -> Result<Option<OauthCredentials>> {
        let cf = self.cf(cf::AUTH)?;

        self.db
            .get_cf(&cf, keys::OAUTH_CREDENTIALS_KEY)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }
}
