//! IGDB client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the IGDB and Twitch clients.
#[derive(Debug, Clone, Deserialize)]
pub struct IgdbConfig {
    /// IGDB API base URL, without a trailing slash.
    #[serde(default = "IgdbConfig::default_base_url")]
    pub base_url: String,

    /// Twitch identity base URL, without a trailing slash.
    #[serde(default = "IgdbConfig::default_twitch_base_url")]
    pub twitch_base_url: String,

    /// Twitch application client ID. Also sent to IGDB as `Client-ID`.
    #[serde(default)]
    pub client_id: String,

    /// Twitch application client secret.
    #[serde(default)]
    pub client_secret: String,

    /// Request timeout in seconds.
    #[serde(default = "IgdbConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Connect timeout in seconds.
    #[serde(default = "IgdbConfig::default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl IgdbConfig {
    /// Default IGDB API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.igdb.com/v4";

    /// Default Twitch identity base URL.
    pub const DEFAULT_TWITCH_BASE_URL: &'static str = "https://id.twitch.tv";

    fn default_base_url() -> String {
        Self::DEFAULT_BASE_URL.to_string()
    }

    fn default_twitch_base_url() -> String {
        Self::DEFAULT_TWITCH_BASE_URL.to_string()
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    const fn default_connect_timeout() -> u64 {
        5
    }

    /// Create a configuration for the given Twitch application.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Self::default()
        }
    }

    /// Get the URL of an IGDB endpoint such as `games`.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url.trim_end_matches('/'))
    }

    /// Get the Twitch token URL.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}/oauth2/token", self.twitch_base_url.trim_end_matches('/'))
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get the connect timeout as a `Duration`.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Build the HTTP client shared by the IGDB and Twitch stores.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout())
            .connect_timeout(self.connect_timeout())
            .build()
    }
}

impl Default for IgdbConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            twitch_base_url: Self::default_twitch_base_url(),
            client_id: String::new(),
            client_secret: String::new(),
            request_timeout_seconds: Self::default_request_timeout(),
            connect_timeout_seconds: Self::default_connect_timeout(),
        }
    }
}
