//! Conversion from GameSpot wire entities to gamedge articles.

use chrono::NaiveDateTime;
use gamedge_core::{ApiError, ArticleId};
use gamedge_data::Article;

use crate::entities::{ApiArticle, ApiArticleImage};

/// Format of `publish_date`.
pub const PUBLISH_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maps wire articles to domain articles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleMapper;

impl ArticleMapper {
    /// Create a mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Convert one article.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unknown` if the publication date does not parse.
    pub fn map_to_article(&self, article: ApiArticle) -> Result<Article, ApiError> {
        let publication_date =
            NaiveDateTime::parse_from_str(&article.publish_date, PUBLISH_DATE_FORMAT)
                .map_err(|e| {
                    ApiError::Unknown(format!(
                        "invalid publish_date {:?} on article {}: {e}",
                        article.publish_date, article.id
                    ))
                })?
                .and_utc()
                .timestamp();

        Ok(Article {
            id: ArticleId::new(article.id),
            title: article.title,
            lede: article.lede,
            image_url: article.image.and_then(thumbnail_url),
            publication_date,
            site_detail_url: article.site_detail_url,
        })
    }

    /// Convert a page of articles. List order is preserved.
    ///
    /// # Errors
    ///
    /// Fails on the first article that does not convert.
    pub fn map_to_articles(&self, articles: Vec<ApiArticle>) -> Result<Vec<Article>, ApiError> {
        articles
            .into_iter()
            .map(|article| self.map_to_article(article))
            .collect()
    }
}

/// Prefer the small square crop, then the larger variants.
fn thumbnail_url(image: ApiArticleImage) -> Option<String> {
    image
        .square_small
        .or(image.screen_tiny)
        .or(image.original)
        .or(image.square_tiny)
        .filter(|url| !url.is_empty())
}
