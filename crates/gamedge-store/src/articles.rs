//! `ArticlesLocalDataStore` for `RocksStore`.

use async_trait::async_trait;
use gamedge_core::{ArticleId, Pagination};
use gamedge_data::articles::select_articles;
use gamedge_data::{Article, ArticlesLocalDataStore, ArticlesStream, StoreError};

use crate::live::live_query;
use crate::rocks::RocksStore;

#[async_trait]
impl ArticlesLocalDataStore for RocksStore {
    async fn save_articles(&self, articles: &[Article]) -> Result<(), StoreError> {
        self.put_articles(articles)
    }

    async fn get_article(&self, id: ArticleId) -> Result<Option<Article>, StoreError> {
        RocksStore::get_article(self, id)
    }

    fn observe_articles(&self, pagination: Pagination) -> ArticlesStream {
        let store = self.clone();
        live_query(self.changes().subscribe(), move || {
            Ok(select_articles(store.list_all_articles()?, pagination))
        })
    }
}
