//! GameSpot client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the GameSpot client.
#[derive(Debug, Clone, Deserialize)]
pub struct GamespotConfig {
    /// GameSpot API base URL, without a trailing slash.
    #[serde(default = "GamespotConfig::default_base_url")]
    pub base_url: String,

    /// GameSpot API key, sent as the `api_key` query parameter.
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds.
    #[serde(default = "GamespotConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Connect timeout in seconds.
    #[serde(default = "GamespotConfig::default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl GamespotConfig {
    /// Default GameSpot API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://www.gamespot.com/api";

    fn default_base_url() -> String {
        Self::DEFAULT_BASE_URL.to_string()
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    const fn default_connect_timeout() -> u64 {
        5
    }

    /// Create a configuration for the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Get the URL of the articles resource.
    #[must_use]
    pub fn articles_url(&self) -> String {
        format!("{}/articles/", self.base_url.trim_end_matches('/'))
    }

    /// Build the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(self.connect_timeout_seconds))
            .build()
    }
}

impl Default for GamespotConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            api_key: String::new(),
            request_timeout_seconds: Self::default_request_timeout(),
            connect_timeout_seconds: Self::default_connect_timeout(),
        }
    }
}
