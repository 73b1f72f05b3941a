//! Gaming news articles.
//!
//! Articles come from GameSpot and are cached locally the same way games are.
//! The news feed shows them newest first.

use gamedge_core::{ArticleId, Pagination};
use serde::{Deserialize, Serialize};

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier.
    pub id: ArticleId,
    /// Headline.
    pub title: String,
    /// Short summary shown under the headline.
    pub lede: String,
    /// Thumbnail image, if the article has one.
    pub image_url: Option<String>,
    /// Publication time, Unix seconds.
    pub publication_date: i64,
    /// Web page of the article.
    pub site_detail_url: String,
}

impl Article {
    /// Create an article with only the required fields set.
    #[must_use]
    pub fn new(
        id: ArticleId,
        title: impl Into<String>,
        site_detail_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            lede: String::new(),
            image_url: None,
            publication_date: 0,
            site_detail_url: site_detail_url.into(),
        }
    }
}

/// Order articles for the news feed: newest first, then by ID.
#[must_use]
pub fn select_articles(
    articles: impl IntoIterator<Item = Article>,
    pagination: Pagination,
) -> Vec<Article> {
    let mut articles: Vec<Article> = articles.into_iter().collect();
    articles.sort_by(|a, b| {
        b.publication_date
            .cmp(&a.publication_date)
            .then_with(|| a.id.cmp(&b.id))
    });
    pagination.apply(articles).collect()
}
