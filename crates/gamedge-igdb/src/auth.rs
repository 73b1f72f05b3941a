//! Twitch OAuth client credentials grant.

use async_trait::async_trait;
use chrono::Utc;
use gamedge_core::{ApiError, DomainError, ErrorMapper};
use gamedge_data::{AuthRemoteDataStore, OauthCredentials};
use serde::Serialize;

use crate::config::IgdbConfig;
use crate::entities::ApiOauthCredentials;
use crate::error::{decode_response, transport_error};

/// Query parameters of the token request.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'static str,
}

/// Issues app access tokens from Twitch.
#[derive(Debug, Clone)]
pub struct TwitchAuthDataStore {
    config: IgdbConfig,
    client: reqwest::Client,
    errors: ErrorMapper,
}

impl TwitchAuthDataStore {
    /// Create a new Twitch auth store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: IgdbConfig) -> reqwest::Result<Self> {
        let client = config.http_client()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a new Twitch auth store with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: IgdbConfig) -> Self {
        Self {
            config,
            client,
            errors: ErrorMapper::new(),
        }
    }

    async fn request_token(&self) -> Result<OauthCredentials, ApiError> {
        let request = TokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            grant_type: "client_credentials",
        };

        let response = self
            .client
            .post(self.config.token_url())
            .query(&request)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let raw: ApiOauthCredentials = decode_response(response).await?;

        Ok(OauthCredentials::from_expires_in(
            raw.access_token,
            raw.token_type,
            raw.expires_in,
            Utc::now(),
        ))
    }
}

#[async_trait]
impl AuthRemoteDataStore for TwitchAuthDataStore {
    async fn get_oauth_credentials(&self) -> Result<OauthCredentials, DomainError> {
        self.request_token().await.map_err(|error| {
            tracing::warn!(error = %error, "Token request failed");
            self.errors.map_to_domain_error(&error)
        })
    }
}
