//! Application state.
//!
//! `App` plays the part a view model plays on a screen: it owns the data
//! stores and exposes one method per thing a command can show.

use std::path::Path;
use std::sync::Arc;

use anyhow::{ensure, Context};
use futures::StreamExt;
use gamedge_data::{
    Article, ArticleId, ArticlesDataStores, AuthDataStores, Game, GameCategory, GameId,
    GamesDataStores, GamesStream, Pagination,
};
use gamedge_gamespot::{GamespotArticlesDataStore, GamespotConfig};
use gamedge_igdb::{IgdbClient, IgdbConfig, IgdbGamesDataStore, TwitchAuthDataStore};
use gamedge_store::RocksStore;

/// The games stores as wired by the binary.
type Games = GamesDataStores<RocksStore, IgdbGamesDataStore>;

/// The news stores as wired by the binary.
type News = ArticlesDataStores<RocksStore, GamespotArticlesDataStore>;

/// Application state shared by all commands.
pub struct App {
    games: Games,
    news: News,
    remote_configured: bool,
    news_configured: bool,
}

impl App {
    /// Open the local store in `data_dir` and connect it to IGDB and GameSpot.
    pub fn open(
        data_dir: &Path,
        config: IgdbConfig,
        news_config: GamespotConfig,
    ) -> anyhow::Result<Self> {
        tracing::debug!(path = %data_dir.display(), "Opening RocksDB store");
        let store = Arc::new(
            RocksStore::open(data_dir)
                .with_context(|| format!("failed to open store at {}", data_dir.display()))?,
        );

        let remote_configured = !config.client_id.is_empty() && !config.client_secret.is_empty();

        let http = config.http_client().context("failed to create HTTP client")?;
        let auth = AuthDataStores::new(
            Arc::clone(&store),
            Arc::new(TwitchAuthDataStore::with_client(http.clone(), config.clone())),
        );
        let igdb = IgdbGamesDataStore::new(IgdbClient::with_client(http, config), Arc::new(auth));

        let news_configured = !news_config.api_key.is_empty();
        let gamespot =
            GamespotArticlesDataStore::new(news_config).context("failed to create HTTP client")?;

        Ok(Self {
            games: GamesDataStores::new(Arc::clone(&store), Arc::new(igdb)),
            news: ArticlesDataStores::new(store, Arc::new(gamespot)),
            remote_configured,
            news_configured,
        })
    }

    fn require_remote(&self) -> anyhow::Result<()> {
        ensure!(
            self.remote_configured,
            "IGDB credentials missing: set --client-id and --client-secret \
             (or IGDB_CLIENT_ID and IGDB_CLIENT_SECRET)"
        );
        Ok(())
    }

    fn require_news(&self) -> anyhow::Result<()> {
        ensure!(
            self.news_configured,
            "GameSpot API key missing: set --gamespot-key (or GAMESPOT_API_KEY)"
        );
        Ok(())
    }

    /// Fetch a page of `category` from IGDB into the local store.
    pub async fn refresh(
        &self,
        category: GameCategory,
        pagination: Pagination,
    ) -> anyhow::Result<usize> {
        self.require_remote()?;
        let games = self.games.refresh(category, pagination).await?;
        Ok(games.len())
    }

    /// The current local page of `category`.
    pub async fn games(
        &self,
        category: GameCategory,
        pagination: Pagination,
    ) -> anyhow::Result<Vec<Game>> {
        let first = self.watch(category, pagination).next().await;
        Ok(first.transpose()?.unwrap_or_default())
    }

    /// Subscribe to `category`.
    pub fn watch(&self, category: GameCategory, pagination: Pagination) -> GamesStream {
        self.games.observe(category, pagination)
    }

    /// Search IGDB, or only the local store when `offline` is set.
    pub async fn search(
        &self,
        query: &str,
        pagination: Pagination,
        offline: bool,
    ) -> anyhow::Result<Vec<Game>> {
        if offline {
            return Ok(self.games.search_games(query, pagination).await?);
        }
        self.require_remote()?;
        Ok(self.games.refresh_search(query, pagination).await?)
    }

    /// A locally stored game.
    pub async fn game(&self, id: GameId) -> anyhow::Result<Game> {
        self.games
            .get_game(id)
            .await?
            .with_context(|| {
                format!("game {id} is not in the local store; refresh a list that contains it first")
            })
    }

    /// Games similar to `id`, optionally fetched from IGDB first.
    pub async fn similar(
        &self,
        id: GameId,
        pagination: Pagination,
        refresh: bool,
    ) -> anyhow::Result<Vec<Game>> {
        let game = self.game(id).await?;
        if refresh {
            self.require_remote()?;
            self.games.refresh_similar_games(&game, pagination).await?;
        }
        Ok(self.games.get_similar_games(&game, pagination).await?)
    }

    /// The official website of a locally stored game.
    pub async fn official_website(&self, id: GameId) -> anyhow::Result<Option<String>> {
        let game = self.game(id).await?;
        Ok(game.official_website().map(|website| website.url.clone()))
    }

    /// Fetch a page of news from GameSpot into the local store.
    pub async fn refresh_news(&self, pagination: Pagination) -> anyhow::Result<usize> {
        self.require_news()?;
        let articles = self.news.refresh(pagination).await?;
        Ok(articles.len())
    }

    /// The current local page of news, newest first.
    pub async fn news(&self, pagination: Pagination) -> anyhow::Result<Vec<Article>> {
        let first = self.news.observe(pagination).next().await;
        Ok(first.transpose()?.unwrap_or_default())
    }

    /// A locally stored article.
    pub async fn article(&self, id: ArticleId) -> anyhow::Result<Article> {
        self.news.get_article(id).await?.with_context(|| {
            format!("article {id} is not in the local store; refresh the news first")
        })
    }
}
