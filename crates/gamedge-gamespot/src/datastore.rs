//! `ArticlesRemoteDataStore` backed by GameSpot.

use async_trait::async_trait;
use gamedge_core::{ApiError, DomainError, ErrorMapper, Pagination};
use gamedge_data::{Article, ArticlesRemoteDataStore};
use serde::Serialize;

use crate::config::GamespotConfig;
use crate::entities::ApiArticle;
use crate::error::{decode_results, transport_error};
use crate::mapper::ArticleMapper;

/// Fields requested for every article.
pub const ARTICLE_FIELDS: &str = "id,title,lede,image,publish_date,site_detail_url";

/// Query parameters of an article listing.
#[derive(Debug, Serialize)]
struct ArticlesRequest<'a> {
    api_key: &'a str,
    format: &'static str,
    field_list: &'static str,
    sort: &'static str,
    offset: u32,
    limit: u32,
}

/// Remote news store talking to GameSpot.
#[derive(Debug, Clone)]
pub struct GamespotArticlesDataStore {
    config: GamespotConfig,
    client: reqwest::Client,
    mapper: ArticleMapper,
    errors: ErrorMapper,
}

impl GamespotArticlesDataStore {
    /// Create a new GameSpot store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: GamespotConfig) -> reqwest::Result<Self> {
        let client = config.http_client()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a new GameSpot store with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: GamespotConfig) -> Self {
        Self {
            config,
            client,
            mapper: ArticleMapper::new(),
            errors: ErrorMapper::new(),
        }
    }

    async fn fetch_articles(&self, pagination: Pagination) -> Result<Vec<Article>, ApiError> {
        let request = ArticlesRequest {
            api_key: &self.config.api_key,
            format: "json",
            field_list: ARTICLE_FIELDS,
            sort: "publish_date:desc",
            offset: pagination.offset,
            limit: pagination.limit,
        };

        let response = self
            .client
            .get(self.config.articles_url())
            .query(&request)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let articles: Vec<ApiArticle> = decode_results(response).await?;
        self.mapper.map_to_articles(articles)
    }
}

#[async_trait]
impl ArticlesRemoteDataStore for GamespotArticlesDataStore {
    async fn get_articles(&self, pagination: Pagination) -> Result<Vec<Article>, DomainError> {
        let articles = self.fetch_articles(pagination).await.map_err(|error| {
            tracing::warn!(error = %error, "GameSpot request failed");
            self.errors.map_to_domain_error(&error)
        })?;

        tracing::debug!(count = articles.len(), "Fetched articles from GameSpot");
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use gamedge_core::ArticleId;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn store_with(base_url: String) -> GamespotArticlesDataStore {
        let config = GamespotConfig {
            base_url,
            ..GamespotConfig::new("api-key")
        };
        GamespotArticlesDataStore::new(config).unwrap()
    }

    fn store_for(server: &MockServer) -> GamespotArticlesDataStore {
        store_with(server.uri())
    }

    #[tokio::test]
    async fn articles_request_carries_key_and_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles/"))
            .and(query_param("api_key", "api-key"))
            .and(query_param("format", "json"))
            .and(query_param("sort", "publish_date:desc"))
            .and(query_param("offset", "20"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "OK",
                "status_code": 1,
                "results": [
                    {"id": 1100006173, "title": "Delayed again", "lede": "Again.",
                     "image": {"square_small": "https://www.gamespot.com/a/1.jpg"},
                     "publish_date": "2020-10-27 12:30:00",
                     "site_detail_url": "https://www.gamespot.com/articles/1100-6173/"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let articles = store_for(&server)
            .get_articles(Pagination::new(20, 10))
            .await
            .unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, ArticleId::new(1_100_006_173));
        assert_eq!(
            articles[0].site_detail_url,
            "https://www.gamespot.com/articles/1100-6173/"
        );
    }

    #[tokio::test]
    async fn invalid_key_is_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "Invalid API Key", "status_code": 100, "results": []
            })))
            .mount(&server)
            .await;

        let error = store_for(&server)
            .get_articles(Pagination::default())
            .await
            .unwrap_err();
        assert_eq!(error, DomainError::ClientError("Invalid API Key".to_string()));
    }

    #[tokio::test]
    async fn failed_envelope_is_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "Filter Error", "status_code": 104, "results": []
            })))
            .mount(&server)
            .await;

        let error = store_for(&server)
            .get_articles(Pagination::default())
            .await
            .unwrap_err();
        assert_eq!(error, DomainError::ClientError("Filter Error".to_string()));
    }

    #[tokio::test]
    async fn server_error_is_service_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let error = store_for(&server)
            .get_articles(Pagination::default())
            .await
            .unwrap_err();
        assert_eq!(error, DomainError::ServiceUnavailable);
    }

    #[tokio::test]
    async fn undecodable_body_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let error = store_for(&server)
            .get_articles(Pagination::default())
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::Unknown(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Nothing listens on port 1
        let error = store_with("http://127.0.0.1:1".to_string())
            .get_articles(Pagination::default())
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::NetworkError(_)));
    }
}
