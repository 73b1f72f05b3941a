//! News data store contracts.

use async_trait::async_trait;
use futures::stream::BoxStream;
use gamedge_core::{ArticleId, DomainError, Pagination};

use crate::articles::Article;
use crate::error::StoreError;

/// A live news feed: emits the current page, then a new page every time a
/// local mutation changes it.
pub type ArticlesStream = BoxStream<'static, Result<Vec<Article>, StoreError>>;

/// Local persistence for news articles.
#[async_trait]
pub trait ArticlesLocalDataStore: Send + Sync {
    /// Insert or replace articles by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn save_articles(&self, articles: &[Article]) -> Result<(), StoreError>;

    /// Get an article by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get_article(&self, id: ArticleId) -> Result<Option<Article>, StoreError>;

    /// Subscribe to the news feed, newest first.
    ///
    /// Nothing runs until the stream is polled. The first item is the current
    /// page, even if empty.
    fn observe_articles(&self, pagination: Pagination) -> ArticlesStream;
}

/// Remote source of news articles.
#[async_trait]
pub trait ArticlesRemoteDataStore: Send + Sync {
    /// Fetch a page of the latest articles.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn get_articles(&self, pagination: Pagination) -> Result<Vec<Article>, DomainError>;
}
