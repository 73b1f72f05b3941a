//! Query semantics shared by the local store implementations.
//!
//! Each query is a filter plus an ordering. Implementations may narrow the
//! candidate set with indexes, but the final selection and order are decided
//! here so every store answers the same way.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use gamedge_core::Pagination;
use serde::{Deserialize, Serialize};

use crate::entities::Game;
use crate::release_dates::ReleaseWindows;

/// The continuously observed game categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameCategory {
    /// Well-rated games from the last year, by popularity.
    Popular,
    /// Games released in the last month, newest first.
    RecentlyReleased,
    /// Unreleased games, soonest first.
    ComingSoon,
    /// Unreleased games, most hyped first.
    MostAnticipated,
}

impl GameCategory {
    /// All categories.
    pub const ALL: [Self; 4] = [
        Self::Popular,
        Self::RecentlyReleased,
        Self::ComingSoon,
        Self::MostAnticipated,
    ];

    /// Exclusive lower bound on the release date for this category.
    #[must_use]
    pub const fn min_release_date(self, windows: &ReleaseWindows) -> i64 {
        match self {
            Self::Popular => windows.popular_min,
            Self::RecentlyReleased => windows.recently_released_min,
            Self::ComingSoon => windows.coming_soon_min,
            Self::MostAnticipated => windows.most_anticipated_min,
        }
    }

    /// Exclusive upper bound on the release date, if the category has one.
    #[must_use]
    pub const fn max_release_date(self, windows: &ReleaseWindows) -> Option<i64> {
        match self {
            Self::RecentlyReleased => Some(windows.recently_released_max),
            Self::Popular | Self::ComingSoon | Self::MostAnticipated => None,
        }
    }

    /// Returns `true` if `game` belongs to this category.
    #[must_use]
    pub fn matches(self, game: &Game, windows: &ReleaseWindows) -> bool {
        let Some(release_date) = game.release_date else {
            return false;
        };
        if release_date <= self.min_release_date(windows) {
            return false;
        }
        if let Some(max) = self.max_release_date(windows) {
            if release_date >= max {
                return false;
            }
        }

        match self {
            Self::Popular => game.users_rating.is_some(),
            Self::MostAnticipated => game.hype_count.is_some(),
            Self::RecentlyReleased | Self::ComingSoon => true,
        }
    }

    /// Ordering of games within this category.
    #[must_use]
    pub fn compare(self, a: &Game, b: &Game) -> Ordering {
        let primary = match self {
            Self::Popular => desc(a.popularity, b.popularity)
                .then_with(|| desc(a.total_rating, b.total_rating)),
            Self::RecentlyReleased => desc(a.release_date, b.release_date),
            Self::ComingSoon => asc(a.release_date, b.release_date),
            Self::MostAnticipated => desc(a.hype_count, b.hype_count),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }

    /// Filter, order and paginate `games` for this category.
    #[must_use]
    pub fn select(
        self,
        games: impl IntoIterator<Item = Game>,
        windows: &ReleaseWindows,
        pagination: Pagination,
    ) -> Vec<Game> {
        let mut selected: Vec<Game> = games
            .into_iter()
            .filter(|game| self.matches(game, windows))
            .collect();
        selected.sort_by(|a, b| self.compare(a, b));
        pagination.apply(selected).collect()
    }

    /// Kebab-case name used on the command line and in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::RecentlyReleased => "recently-released",
            Self::ComingSoon => "coming-soon",
            Self::MostAnticipated => "most-anticipated",
        }
    }
}

impl fmt::Display for GameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for GameCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Order games from a company's catalogue: newest release first, undated last.
#[must_use]
pub fn select_company_developed(mut games: Vec<Game>, pagination: Pagination) -> Vec<Game> {
    games.sort_by(|a, b| desc(a.release_date, b.release_date).then_with(|| a.id.cmp(&b.id)));
    pagination.apply(games).collect()
}

/// Order similar games: best rated first.
#[must_use]
pub fn select_similar(mut games: Vec<Game>, pagination: Pagination) -> Vec<Game> {
    games.sort_by(by_total_rating);
    pagination.apply(games).collect()
}

/// Case-insensitive substring search on the name, best rated first.
///
/// A blank query matches nothing.
#[must_use]
pub fn select_search(
    games: impl IntoIterator<Item = Game>,
    query: &str,
    pagination: Pagination,
) -> Vec<Game> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matched: Vec<Game> = games
        .into_iter()
        .filter(|game| game.name.to_lowercase().contains(&needle))
        .collect();
    matched.sort_by(by_total_rating);
    pagination.apply(matched).collect()
}

fn by_total_rating(a: &Game, b: &Game) -> Ordering {
    desc(a.total_rating, b.total_rating).then_with(|| a.id.cmp(&b.id))
}

/// Descending order with missing values last.
fn desc<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending order with missing values last.
fn asc<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
