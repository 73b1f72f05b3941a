//! HTTP client for the IGDB API.

use gamedge_core::ApiError;
use gamedge_data::OauthCredentials;
use serde::de::DeserializeOwned;

use crate::config::IgdbConfig;
use crate::error::{decode_response, transport_error};
use crate::query::Query;

/// Endpoint serving games.
pub const GAMES_ENDPOINT: &str = "games";

/// Client for the IGDB v4 API.
///
/// Every request is an Apicalypse query POSTed to an endpoint and answered
/// with a JSON array.
#[derive(Debug, Clone)]
pub struct IgdbClient {
    config: IgdbConfig,
    client: reqwest::Client,
}

impl IgdbClient {
    /// Create a new IGDB client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: IgdbConfig) -> reqwest::Result<Self> {
        let client = config.http_client()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a new IGDB client with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: IgdbConfig) -> Self {
        Self { config, client }
    }

    /// Get the client configuration.
    #[must_use]
    pub fn config(&self) -> &IgdbConfig {
        &self.config
    }

    /// Run `query` against `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the call.
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &Query,
        credentials: &OauthCredentials,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.config.endpoint_url(endpoint);
        let body = query.build();
        tracing::trace!(%url, %body, "IGDB request");

        let response = self
            .client
            .post(&url)
            .header("Client-ID", &self.config.client_id)
            .header(reqwest::header::AUTHORIZATION, credentials.authorization_header())
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        decode_response(response).await
    }
}
