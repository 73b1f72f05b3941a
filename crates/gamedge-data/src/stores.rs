//! Local/remote store pairs.
//!
//! These bundle a feature's two stores and implement the fetch, persist,
//! serve-from-local flow on top of them.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use gamedge_core::{ArticleId, GameId, Pagination};

use crate::articles::Article;
use crate::auth::OauthCredentials;
use crate::datastores::{
    ArticlesLocalDataStore, ArticlesRemoteDataStore, ArticlesStream, AuthLocalDataStore,
    AuthRemoteDataStore, CredentialsProvider, GamesLocalDataStore, GamesRemoteDataStore,
    GamesStream,
};
use crate::entities::{Company, Game};
use crate::error::{DataError, Result};
use crate::query::GameCategory;

/// Cached credentials this close to expiry are treated as expired.
pub const CREDENTIALS_EXPIRY_MARGIN_SECS: i64 = 60;

/// The games stores.
pub struct GamesDataStores<L: ?Sized, R: ?Sized> {
    /// On-device store.
    pub local: Arc<L>,
    /// Network store.
    pub remote: Arc<R>,
}

impl<L: ?Sized, R: ?Sized> Clone for GamesDataStores<L, R> {
    fn clone(&self) -> Self {
        Self {
            local: Arc::clone(&self.local),
            remote: Arc::clone(&self.remote),
        }
    }
}

impl<L, R> GamesDataStores<L, R>
where
    L: GamesLocalDataStore + ?Sized,
    R: GamesRemoteDataStore + ?Sized,
{
    /// Bundle a local and a remote store.
    #[must_use]
    pub fn new(local: Arc<L>, remote: Arc<R>) -> Self {
        Self { local, remote }
    }

    /// Fetch a page of `category` from remote and persist it locally.
    ///
    /// Live subscriptions on the local store pick the new data up.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Domain` if the fetch fails and `DataError::Store`
    /// if persisting fails.
    pub async fn refresh(
        &self,
        category: GameCategory,
        pagination: Pagination,
    ) -> Result<Vec<Game>> {
        let games = self.remote.get_games(category, pagination).await?;
        self.persist(&games).await?;
        tracing::debug!(%category, count = games.len(), "Refreshed games");
        Ok(games)
    }

    /// Search remote and persist the results.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or the save fails.
    pub async fn refresh_search(&self, query: &str, pagination: Pagination) -> Result<Vec<Game>> {
        let games = self.remote.search_games(query, pagination).await?;
        self.persist(&games).await?;
        Ok(games)
    }

    /// Fetch a company's games from remote and persist them.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or the save fails.
    pub async fn refresh_company_developed_games(
        &self,
        company: &Company,
        pagination: Pagination,
    ) -> Result<Vec<Game>> {
        let games = self
            .remote
            .get_company_developed_games(company, pagination)
            .await?;
        self.persist(&games).await?;
        Ok(games)
    }

    /// Fetch similar games from remote and persist them.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch or the save fails.
    pub async fn refresh_similar_games(
        &self,
        game: &Game,
        pagination: Pagination,
    ) -> Result<Vec<Game>> {
        let games = self.remote.get_similar_games(game, pagination).await?;
        self.persist(&games).await?;
        Ok(games)
    }

    /// Subscribe to a category on the local store.
    #[must_use]
    pub fn observe(&self, category: GameCategory, pagination: Pagination) -> GamesStream {
        self.local.observe_games(category, pagination)
    }

    /// Get a locally stored game.
    ///
    /// # Errors
    ///
    /// Returns an error if the local store fails.
    pub async fn get_game(&self, id: GameId) -> Result<Option<Game>> {
        Ok(self.local.get_game(id).await?)
    }

    /// Search locally stored games. Never reaches the remote store.
    ///
    /// # Errors
    ///
    /// Returns an error if the local store fails.
    pub async fn search_games(&self, query: &str, pagination: Pagination) -> Result<Vec<Game>> {
        Ok(self.local.search_games(query, pagination).await?)
    }

    /// Locally stored games developed by `company`. Never reaches the remote
    /// store.
    ///
    /// # Errors
    ///
    /// Returns an error if the local store fails.
    pub async fn get_company_developed_games(
        &self,
        company: &Company,
        pagination: Pagination,
    ) -> Result<Vec<Game>> {
        Ok(self
            .local
            .get_company_developed_games(company, pagination)
            .await?)
    }

    /// Locally stored games similar to `game`. Never reaches the remote store.
    ///
    /// # Errors
    ///
    /// Returns an error if the local store fails.
    pub async fn get_similar_games(&self, game: &Game, pagination: Pagination) -> Result<Vec<Game>> {
        Ok(self.local.get_similar_games(game, pagination).await?)
    }

    async fn persist(&self, games: &[Game]) -> Result<()> {
        if games.is_empty() {
            return Ok(());
        }
        self.local.save_games(games).await?;
        Ok(())
    }
}

/// The news stores.
pub struct ArticlesDataStores<L: ?Sized, R: ?Sized> {
    /// On-device store.
    pub local: Arc<L>,
    /// Network store.
    pub remote: Arc<R>,
}

impl<L: ?Sized, R: ?Sized> Clone for ArticlesDataStores<L, R> {
    fn clone(&self) -> Self {
        Self {
            local: Arc::clone(&self.local),
            remote: Arc::clone(&self.remote),
        }
    }
}

impl<L, R> ArticlesDataStores<L, R>
where
    L: ArticlesLocalDataStore + ?Sized,
    R: ArticlesRemoteDataStore + ?Sized,
{
    /// Bundle a local and a remote store.
    #[must_use]
    pub fn new(local: Arc<L>, remote: Arc<R>) -> Self {
        Self { local, remote }
    }

    /// Fetch a page of news from remote and persist it locally.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Domain` if the fetch fails and `DataError::Store`
    /// if persisting fails.
    pub async fn refresh(&self, pagination: Pagination) -> Result<Vec<Article>> {
        let articles = self.remote.get_articles(pagination).await?;
        if !articles.is_empty() {
            self.local.save_articles(&articles).await?;
        }
        tracing::debug!(count = articles.len(), "Refreshed articles");
        Ok(articles)
    }

    /// Subscribe to the local news feed.
    #[must_use]
    pub fn observe(&self, pagination: Pagination) -> ArticlesStream {
        self.local.observe_articles(pagination)
    }

    /// Get a locally stored article.
    ///
    /// # Errors
    ///
    /// Returns an error if the local store fails.
    pub async fn get_article(&self, id: ArticleId) -> Result<Option<Article>> {
        Ok(self.local.get_article(id).await?)
    }
}

/// The authentication stores.
pub struct AuthDataStores<L: ?Sized, R: ?Sized> {
    /// On-device credential cache.
    pub local: Arc<L>,
    /// Credential issuer.
    pub remote: Arc<R>,
}

impl<L, R> AuthDataStores<L, R>
where
    L: AuthLocalDataStore + ?Sized,
    R: AuthRemoteDataStore + ?Sized,
{
    /// Bundle a local and a remote store.
    #[must_use]
    pub fn new(local: Arc<L>, remote: Arc<R>) -> Self {
        Self { local, remote }
    }

    async fn fetch_and_cache(&self) -> Result<OauthCredentials> {
        let credentials = self.remote.get_oauth_credentials().await?;
        self.local.save_oauth_credentials(&credentials).await?;
        tracing::info!(expires_at = %credentials.expires_at, "Obtained new OAuth credentials");
        Ok(credentials)
    }
}

#[async_trait]
impl<L, R> CredentialsProvider for AuthDataStores<L, R>
where
    L: AuthLocalDataStore + ?Sized,
    R: AuthRemoteDataStore + ?Sized,
{
    async fn credentials(&self) -> std::result::Result<OauthCredentials, DataError> {
        let margin = Duration::seconds(CREDENTIALS_EXPIRY_MARGIN_SECS);

        match self.local.get_oauth_credentials().await? {
            Some(cached) if !cached.expires_within(Utc::now(), margin) => Ok(cached),
            Some(_) => {
                tracing::debug!("Cached OAuth credentials expired");
                self.fetch_and_cache().await
            }
            None => self.fetch_and_cache().await,
        }
    }
}
