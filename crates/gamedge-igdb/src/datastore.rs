//! `GamesRemoteDataStore` backed by IGDB.

use std::sync::Arc;

use async_trait::async_trait;
use gamedge_core::{DomainError, ErrorMapper, GameId, Pagination};
use gamedge_data::{
    Company, CredentialsProvider, Game, GameCategory, GamesRemoteDataStore, ReleaseDatesProvider,
    SystemReleaseDates,
};

use crate::client::{IgdbClient, GAMES_ENDPOINT};
use crate::entities::ApiGame;
use crate::mapper::EntityMapper;
use crate::query::Query;

/// Remote games store talking to IGDB.
#[derive(Clone)]
pub struct IgdbGamesDataStore {
    client: IgdbClient,
    credentials: Arc<dyn CredentialsProvider>,
    release_dates: Arc<dyn ReleaseDatesProvider>,
    mapper: EntityMapper,
    errors: ErrorMapper,
}

impl IgdbGamesDataStore {
    /// Create a store that authenticates through `credentials`.
    #[must_use]
    pub fn new(client: IgdbClient, credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self::with_release_dates(client, credentials, Arc::new(SystemReleaseDates))
    }

    /// Create a store whose category queries use the given release windows.
    #[must_use]
    pub fn with_release_dates(
        client: IgdbClient,
        credentials: Arc<dyn CredentialsProvider>,
        release_dates: Arc<dyn ReleaseDatesProvider>,
    ) -> Self {
        Self {
            client,
            credentials,
            release_dates,
            mapper: EntityMapper::new(),
            errors: ErrorMapper::new(),
        }
    }

    async fn fetch_games(&self, query: Query) -> Result<Vec<Game>, DomainError> {
        let credentials = self
            .credentials
            .credentials()
            .await
            .map_err(gamedge_data::DataError::into_domain_error)?;

        let games: Vec<ApiGame> = self
            .client
            .post(GAMES_ENDPOINT, &query, &credentials)
            .await
            .map_err(|error| {
                tracing::warn!(error = %error, "IGDB request failed");
                self.errors.map_to_domain_error(&error)
            })?;

        tracing::debug!(count = games.len(), "Fetched games from IGDB");
        Ok(self.mapper.map_to_games(games))
    }

    async fn fetch_by_ids(
        &self,
        ids: &[GameId],
        sort: &'static str,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError> {
        // IGDB rejects `where id = ()`
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_games(Query::ids(ids, sort, pagination)).await
    }
}

#[async_trait]
impl GamesRemoteDataStore for IgdbGamesDataStore {
    async fn get_games(
        &self,
        category: GameCategory,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError> {
        let windows = self.release_dates.windows();
        self.fetch_games(Query::category(category, &windows, pagination))
            .await
    }

    async fn search_games(
        &self,
        query: &str,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.fetch_games(Query::games().search(query.trim()).paginate(pagination))
            .await
    }

    async fn get_company_developed_games(
        &self,
        company: &Company,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError> {
        self.fetch_by_ids(&company.developed_games, "first_release_date", pagination)
            .await
    }

    async fn get_similar_games(
        &self,
        game: &Game,
        pagination: Pagination,
    ) -> Result<Vec<Game>, DomainError> {
        self.fetch_by_ids(&game.similar_games, "total_rating", pagination)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use gamedge_core::CompanyId;
    use gamedge_data::{DataError, OauthCredentials, ReleaseWindows, StoreError};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::IgdbConfig;

    struct StaticCredentials;

    #[async_trait]
    impl CredentialsProvider for StaticCredentials {
        async fn credentials(&self) -> Result<OauthCredentials, DataError> {
            Ok(OauthCredentials {
                access_token: "token".to_string(),
                token_type: "bearer".to_string(),
                expires_at: Utc::now() + Duration::hours(1),
            })
        }
    }

    struct BrokenCredentials;

    #[async_trait]
    impl CredentialsProvider for BrokenCredentials {
        async fn credentials(&self) -> Result<OauthCredentials, DataError> {
            Err(StoreError::Database("disk full".to_string()).into())
        }
    }

    fn windows() -> ReleaseWindows {
        ReleaseWindows {
            popular_min: 1_000,
            recently_released_min: 2_000,
            recently_released_max: 3_000,
            coming_soon_min: 3_000,
            most_anticipated_min: 3_000,
        }
    }

    fn store_with(
        base_url: String,
        credentials: Arc<dyn CredentialsProvider>,
    ) -> IgdbGamesDataStore {
        let config = IgdbConfig {
            base_url,
            ..IgdbConfig::new("client-id", "client-secret")
        };
        let client = IgdbClient::new(config).unwrap();
        IgdbGamesDataStore::with_release_dates(client, credentials, Arc::new(windows()))
    }

    fn store_for(server: &MockServer) -> IgdbGamesDataStore {
        store_with(server.uri(), Arc::new(StaticCredentials))
    }

    #[tokio::test]
    async fn category_request_is_authenticated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/games"))
            .and(header("Client-ID", "client-id"))
            .and(header("Authorization", "Bearer token"))
            .and(body_string_contains("where first_release_date > 3000 & hypes != null;"))
            .and(body_string_contains("limit 5; offset 10;"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Upcoming", "first_release_date": 4000, "hypes": 80,
                 "cover": {"url": "//images.igdb.com/a.jpg"}},
                {"id": 2, "name": "Later", "first_release_date": 5000, "hypes": 10}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let games = store_for(&server)
            .get_most_anticipated_games(Pagination::new(10, 5))
            .await
            .unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].name, "Upcoming");
        assert_eq!(games[0].cover.as_ref().unwrap().url, "https://images.igdb.com/a.jpg");
    }

    #[tokio::test]
    async fn server_error_is_service_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let error = store_for(&server)
            .get_popular_games(Pagination::default())
            .await
            .unwrap_err();
        assert_eq!(error, DomainError::ServiceUnavailable);
    }

    #[tokio::test]
    async fn rejected_query_is_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!([
                {"title": "Syntax Error", "status": 400}
            ])))
            .mount(&server)
            .await;

        let error = store_for(&server)
            .get_coming_soon_games(Pagination::default())
            .await
            .unwrap_err();
        assert_eq!(error, DomainError::ClientError("Syntax Error".to_string()));
    }

    #[tokio::test]
    async fn not_found_without_body_uses_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let error = store_for(&server)
            .get_recently_released_games(Pagination::default())
            .await
            .unwrap_err();
        assert_eq!(error, DomainError::ClientError("Not Found".to_string()));
    }

    #[tokio::test]
    async fn undecodable_body_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let error = store_for(&server)
            .get_popular_games(Pagination::default())
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::Unknown(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Nothing listens on port 1
        let store = store_with("http://127.0.0.1:1".to_string(), Arc::new(StaticCredentials));

        let error = store
            .get_popular_games(Pagination::default())
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::NetworkError(_)));
    }

    #[tokio::test]
    async fn credential_failure_is_reported() {
        let server = MockServer::start().await;
        let store = store_with(server.uri(), Arc::new(BrokenCredentials));

        let error = store
            .get_popular_games(Pagination::default())
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::Unknown(_)));
    }

    #[tokio::test]
    async fn search_sends_search_clause() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("search \"zelda\";"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 7346, "name": "The Legend of Zelda: Breath of the Wild"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let store = store_for(&server);
        let games = store.search_games(" zelda ", Pagination::default()).await.unwrap();
        assert_eq!(games.len(), 1);

        let blank = store.search_games("  ", Pagination::default()).await.unwrap();
        assert!(blank.is_empty());
    }

    #[tokio::test]
    async fn empty_id_lists_skip_the_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let company = Company {
            id: CompanyId::new(1),
            name: "Nobody".to_string(),
            developed_games: Vec::new(),
        };
        let games = store_for(&server)
            .get_company_developed_games(&company, Pagination::default())
            .await
            .unwrap();
        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn similar_games_query_by_ids() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("where id = (472,1020);"))
            .and(body_string_contains("sort total_rating desc;"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut game = Game::new(GameId::new(1942), "The Witcher 3");
        game.similar_games = vec![GameId::new(472), GameId::new(1020)];

        let games = store_for(&server)
            .get_similar_games(&game, Pagination::default())
            .await
            .unwrap();
        assert!(games.is_empty());
    }
}
