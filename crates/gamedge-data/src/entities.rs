//! Game entities.
//!
//! These are the internal representation of games, independent of the IGDB
//! wire format. They are persisted as-is by the local store.

use gamedge_core::{CompanyId, GameId};
use serde::{Deserialize, Serialize};

/// A game record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier.
    pub id: GameId,
    /// Number of users following the game before release.
    pub hype_count: Option<u32>,
    /// First release date, in unix seconds.
    pub release_date: Option<i64>,
    /// Rating aggregated from critic reviews (0-100).
    pub critics_rating: Option<f64>,
    /// Rating from IGDB users (0-100).
    pub users_rating: Option<f64>,
    /// Weighted combination of critics and users ratings (0-100).
    pub total_rating: Option<f64>,
    /// IGDB popularity score.
    pub popularity: Option<f64>,
    /// Display name.
    pub name: String,
    /// Short description.
    pub summary: Option<String>,
    /// Plot description.
    pub storyline: Option<String>,
    /// Cover art.
    pub cover: Option<Image>,
    /// Estimated time to finish.
    pub time_to_beat: TimeToBeat,
    /// Age ratings from rating boards.
    pub age_ratings: Vec<AgeRating>,
    /// Artwork images.
    pub artworks: Vec<Image>,
    /// Screenshots.
    pub screenshots: Vec<Image>,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Platforms the game was released on.
    pub platforms: Vec<Platform>,
    /// Player perspectives (first person, isometric, ...).
    pub player_perspectives: Vec<PlayerPerspective>,
    /// Themes.
    pub themes: Vec<Theme>,
    /// Game modes (single player, co-op, ...).
    pub modes: Vec<Mode>,
    /// Keywords.
    pub keywords: Vec<Keyword>,
    /// Companies involved in development or publishing.
    pub involved_companies: Vec<InvolvedCompany>,
    /// Related websites.
    pub websites: Vec<Website>,
    /// Identifiers of similar games.
    pub similar_games: Vec<GameId>,
}

impl Game {
    /// Create a game with only an identifier and a name.
    #[must_use]
    pub fn new(id: GameId, name: impl Into<String>) -> Self {
        Self {
            id,
            hype_count: None,
            release_date: None,
            critics_rating: None,
            users_rating: None,
            total_rating: None,
            popularity: None,
            name: name.into(),
            summary: None,
            storyline: None,
            cover: None,
            time_to_beat: TimeToBeat::default(),
            age_ratings: Vec::new(),
            artworks: Vec::new(),
            screenshots: Vec::new(),
            genres: Vec::new(),
            platforms: Vec::new(),
            player_perspectives: Vec::new(),
            themes: Vec::new(),
            modes: Vec::new(),
            keywords: Vec::new(),
            involved_companies: Vec::new(),
            websites: Vec::new(),
            similar_games: Vec::new(),
        }
    }

    /// Companies credited as developers.
    pub fn developers(&self) -> impl Iterator<Item = &Company> {
        self.involved_companies
            .iter()
            .filter(|involved| involved.is_developer)
            .map(|involved| &involved.company)
    }

    /// The official website, if listed.
    #[must_use]
    pub fn official_website(&self) -> Option<&Website> {
        self.websites
            .iter()
            .find(|website| website.category == WebsiteCategory::Official)
    }
}

/// An image hosted by IGDB.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Width in pixels.
    pub width: Option<u32>,
    /// Height in pixels.
    pub height: Option<u32>,
    /// Absolute URL.
    pub url: String,
}

/// Time-to-beat estimates, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeToBeat {
    /// Main story plus extras.
    pub completely: Option<u64>,
    /// Main story only.
    pub hastily: Option<u64>,
    /// Typical playthrough.
    pub normally: Option<u64>,
}

/// A rating assigned by a rating board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRating {
    /// The rating board.
    pub category: AgeRatingCategory,
    /// The rating itself.
    pub rating: AgeRatingType,
}

/// Rating boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRatingCategory {
    /// Entertainment Software Rating Board.
    Esrb,
    /// Pan European Game Information.
    Pegi,
    /// Any board this client does not know about.
    Unknown,
}

/// Ratings across all boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum AgeRatingType {
    Three,
    Seven,
    Twelve,
    Sixteen,
    Eighteen,
    RatingPending,
    EarlyChildhood,
    Everyone,
    EveryoneTenPlus,
    Teen,
    Mature,
    AdultsOnly,
    Unknown,
}

impl AgeRatingType {
    /// Short label as printed on the box.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Seven => "7",
            Self::Twelve => "12",
            Self::Sixteen => "16",
            Self::Eighteen => "18",
            Self::RatingPending => "RP",
            Self::EarlyChildhood => "EC",
            Self::Everyone => "E",
            Self::EveryoneTenPlus => "E10+",
            Self::Teen => "T",
            Self::Mature => "M",
            Self::AdultsOnly => "AO",
            Self::Unknown => "?",
        }
    }
}

/// A genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Genre name.
    pub name: String,
}

/// A platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Short name such as `PC` or `PS5`.
    pub abbreviation: String,
}

/// A player perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPerspective {
    /// Perspective name.
    pub name: String,
}

/// A theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name.
    pub name: String,
}

/// A game mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    /// Mode name.
    pub name: String,
}

/// A keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Keyword text.
    pub name: String,
}

/// A company credited on a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvolvedCompany {
    /// The company.
    pub company: Company,
    /// Credited as developer.
    pub is_developer: bool,
    /// Credited as publisher.
    pub is_publisher: bool,
    /// Credited as porting studio.
    pub is_porter: bool,
}

/// A game company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier.
    pub id: CompanyId,
    /// Company name.
    pub name: String,
    /// Identifiers of games the company developed.
    pub developed_games: Vec<GameId>,
}

/// A website related to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    /// Absolute URL.
    pub url: String,
    /// Kind of website.
    pub category: WebsiteCategory,
    /// Whether IGDB marks the site as trusted.
    pub is_trusted: bool,
}

/// Kinds of websites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum WebsiteCategory {
    Official,
    Wikia,
    Wikipedia,
    Facebook,
    Twitter,
    Twitch,
    Instagram,
    Youtube,
    Iphone,
    Ipad,
    Android,
    Steam,
    Reddit,
    Itch,
    EpicGames,
    Gog,
    Discord,
    Unknown,
}
