//! Authentication data store contracts.

use async_trait::async_trait;
use gamedge_core::DomainError;

use crate::auth::OauthCredentials;
use crate::error::{DataError, StoreError};

/// Local cache for OAuth credentials.
#[async_trait]
pub trait AuthLocalDataStore: Send + Sync {
    /// Replace the cached credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn save_oauth_credentials(&self, credentials: &OauthCredentials)
        -> Result<(), StoreError>;

    /// Get the cached credentials, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get_oauth_credentials(&self) -> Result<Option<OauthCredentials>, StoreError>;
}

/// Issuer of OAuth credentials.
#[async_trait]
pub trait AuthRemoteDataStore: Send + Sync {
    /// Request a new app access token.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the remote call.
    async fn get_oauth_credentials(&self) -> Result<OauthCredentials, DomainError>;
}

/// Something that can hand out currently valid credentials.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Credentials that are valid right now.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the cache nor the issuer can provide them.
    async fn credentials(&self) -> Result<OauthCredentials, DataError>;
}
