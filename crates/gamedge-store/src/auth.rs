//! `AuthLocalDataStore` for `RocksStore`.

use async_trait::async_trait;
use gamedge_data::{AuthLocalDataStore, OauthCredentials, StoreError};

use crate::rocks::RocksStore;

#[async_trait]
impl AuthLocalDataStore for RocksStore {
    async fn save_oauth_credentials(
        &self,
        credentials: &OauthCredentials,
    ) -> Result<(), StoreError> {
        self.put_credentials(credentials)
    }

    async fn get_oauth_credentials(&self) -> Result<Option<OauthCredentials>, StoreError> {
        self.get_credentials()
    }
}
