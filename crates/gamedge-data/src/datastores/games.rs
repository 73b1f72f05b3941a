//! Games data store contracts.

use async_trait::async_trait;
use futures::stream::BoxStream;
use gamedge_core::{DomainError, GameId, Pagination};

use crate::entities::{Company, Game};
use crate::error::StoreError;
use crate::query::GameCategory;

/// A live query: emits the current result, then a new result every time a
/// local mutation changes it.
///
/// The stream never ends on its own. Dropping it cancels the subscription.
pub type GamesStream = BoxStream<'static, Result<Vec<Game>, StoreError>>;

/// Local persistence for games.
#[async_trait]
pub trait GamesLocalDataStore: Send + Sync {
    /// Insert or replace games by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn save_games(&self, games: &[Game]) -> Result<(), StoreError>;

    /// Get a game by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get_game(&self, id: GameId) -> Result<Option<Game>, StoreError>;

    /// Games developed by `company` that are stored locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get_company_developed_games(
        &self,
        company: &Company,
        pagination: Pagination,
    ) -> Result<Vec<Game>, StoreError>;

    /// Games listed as similar to `game` that are stored locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get_similar_games(
        &self,
        game: &Game,
        pagination: Pagination,
    ) -> Result<Vec<Game>, StoreError>;

    /// Games whose name contains `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn search_games(
        &self,
        query: &str,
        pagination: Pagination,
    ) -> Result<Vec<Game>, StoreError>;

    /// Subscribe to a category.
    ///
    /// Nothing runs until the stream is polled. The first item is the current
    /// result, even if empty.
    fn observe_games(&self, category: GameCategory, pagination: Pagination) -> GamesStream;

    /// Subscribe to popular games.
    fn observe_popular_games(&self, pagination: Pagination) -> GamesStream {
        self.observe_games(GameCategory::Popular, pagination)
    }

    /// Subscribe to recently released games.
    fn observe_recently_released_games(&self, pagination: Pagination) -> GamesStream {
        self.observe_games(GameCategory::RecentlyReleased, pagination)
    }

    /// Subscribe to coming-soon games.
    fn observe_coming_soon_games(&self, pagination: Pagination) -> GamesStream {
        self.observe_games(GameCategory::ComingSoon, pagination)
    }

    /// Subscribe to most-anticipated games.
    fn observe_most_anticipated_games(&self, pagination: Pagination) -> GamesStream {
        self.observe_games(GameCategory::MostAnticipated, pagination)
    }
}

/// Remote source of games.
#[async_trait]
pub trait GamesRemoteDataStore: Send + Sync {
    /// Fetch a page of a category.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn get_games(
        &self,
        category: GameCategory,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError>;

    /// Fetch games whose name matches `query`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn search_games(
        &self,
        query: &str,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError>;

    /// Fetch games developed by `company`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn get_company_developed_games(
        &self,
        company: &Company,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError>;

    /// Fetch games similar to `game`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn get_similar_games(
        &self,
        game: &Game,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError>;

    /// Fetch popular games.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn get_popular_games(&self, pagination: Pagination) -> Result<Vec<Game>, DomainError> {
        self.get_games(GameCategory::Popular, pagination).await
    }

    /// Fetch recently released games.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn get_recently_released_games(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError> {
        self.get_games(GameCategory::RecentlyReleased, pagination)
            .await
    }

    /// Fetch coming-soon games.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn get_coming_soon_games(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError> {
        self.get_games(GameCategory::ComingSoon, pagination).await
    }

    /// Fetch most-anticipated games.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn get_most_anticipated_games(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError> {
        self.get_games(GameCategory::MostAnticipated, pagination)
            .await
    }
}
