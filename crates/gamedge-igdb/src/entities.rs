//! IGDB wire entities.
//!
//! Field names follow the IGDB v4 schema. Everything is optional on the wire
//! because IGDB omits fields that have no value.

#![allow(missing_docs)]

use serde::Deserialize;

/// A game as returned by the `games` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiGame {
    pub id: u64,
    #[serde(rename = "hypes")]
    pub hype_count: Option<u32>,
    #[serde(rename = "first_release_date")]
    pub release_date: Option<i64>,
    #[serde(rename = "aggregated_rating")]
    pub critics_rating: Option<f64>,
    #[serde(rename = "rating")]
    pub users_rating: Option<f64>,
    pub total_rating: Option<f64>,
    pub popularity: Option<f64>,
    pub name: String,
    pub summary: Option<String>,
    pub storyline: Option<String>,
    pub cover: Option<ApiImage>,
    pub time_to_beat: Option<ApiTimeToBeat>,
    pub age_ratings: Vec<ApiAgeRating>,
    pub artworks: Vec<ApiImage>,
    pub screenshots: Vec<ApiImage>,
    pub genres: Vec<ApiNamed>,
    pub platforms: Vec<ApiPlatform>,
    pub player_perspectives: Vec<ApiNamed>,
    pub themes: Vec<ApiNamed>,
    #[serde(rename = "game_modes")]
    pub modes: Vec<ApiNamed>,
    pub keywords: Vec<ApiNamed>,
    pub involved_companies: Vec<ApiInvolvedCompany>,
    pub websites: Vec<ApiWebsite>,
    pub similar_games: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiImage {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Usually protocol-relative (`//images.igdb.com/...`).
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiTimeToBeat {
    pub completely: Option<u64>,
    pub hastily: Option<u64>,
    pub normally: Option<u64>,
}

/// Rating board and rating, as IGDB enum codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiAgeRating {
    pub category: i32,
    pub rating: i32,
}

/// Any entity that is only fetched for its name (genre, theme, keyword, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiNamed {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiPlatform {
    pub abbreviation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiInvolvedCompany {
    pub company: ApiCompany,
    pub developer: bool,
    pub publisher: bool,
    pub porting: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiCompany {
    pub id: u64,
    pub name: String,
    /// Identifiers of games the company developed.
    pub developed: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiWebsite {
    pub url: String,
    /// IGDB website category code.
    pub category: i32,
    pub trusted: bool,
}

/// Response of the Twitch client credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiOauthCredentials {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
}
