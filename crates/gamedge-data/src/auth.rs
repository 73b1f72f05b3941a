//! OAuth credentials used to call IGDB.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An app access token issued by Twitch for IGDB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OauthCredentials {
    /// The bearer token.
    pub access_token: String,
    /// Token type reported by the issuer (normally `bearer`).
    pub token_type: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl OauthCredentials {
    /// Build credentials from an issuer response received at `issued_at`.
    #[must_use]
    pub fn from_expires_in(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in_secs: u64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expires_at = i64::try_from(expires_in_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_at,
        }
    }

    /// Returns `true` if the token expires within `margin` of `now`.
    #[must_use]
    pub fn expires_within(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        now + margin >= self.expires_at
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
