//! GameSpot wire entities.

#![allow(missing_docs)]

use serde::Deserialize;

/// Status code of a successful GameSpot response.
pub const STATUS_OK: u32 = 1;

/// The envelope every GameSpot list response is wrapped in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub status_code: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// An article as returned by the `articles` resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiArticle {
    pub id: u64,
    pub title: String,
    pub lede: String,
    pub image: Option<ApiArticleImage>,
    /// `yyyy-MM-dd HH:mm:ss`.
    pub publish_date: String,
    pub site_detail_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiArticleImage {
    pub square_tiny: Option<String>,
    pub screen_tiny: Option<String>,
    pub square_small: Option<String>,
    pub original: Option<String>,
}
