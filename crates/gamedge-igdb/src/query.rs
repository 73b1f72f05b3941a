//! Apicalypse query building.
//!
//! IGDB takes its queries as a plain-text body:
//!
//! ```text
//! fields name, rating; where rating != null; sort rating desc; limit 20; offset 0;
//! ```

use std::fmt;

use gamedge_core::{GameId, Pagination};
use gamedge_data::{GameCategory, ReleaseWindows};

/// Fields requested for every game.
pub const GAME_FIELDS: &[&str] = &[
    "id",
    "hypes",
    "first_release_date",
    "aggregated_rating",
    "rating",
    "total_rating",
    "popularity",
    "name",
    "summary",
    "storyline",
    "cover.width",
    "cover.height",
    "cover.url",
    "time_to_beat.completely",
    "time_to_beat.hastily",
    "time_to_beat.normally",
    "age_ratings.category",
    "age_ratings.rating",
    "artworks.width",
    "artworks.height",
    "artworks.url",
    "screenshots.width",
    "screenshots.height",
    "screenshots.url",
    "genres.name",
    "platforms.abbreviation",
    "player_perspectives.name",
    "themes.name",
    "game_modes.name",
    "keywords.name",
    "involved_companies.company.id",
    "involved_companies.company.name",
    "involved_companies.company.developed",
    "involved_companies.developer",
    "involved_companies.publisher",
    "involved_companies.porting",
    "websites.url",
    "websites.category",
    "websites.trusted",
    "similar_games",
];

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// An Apicalypse query under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    search: Option<String>,
    fields: Vec<&'static str>,
    conditions: Vec<String>,
    sort: Option<(&'static str, SortOrder)>,
    pagination: Option<Pagination>,
}

impl Query {
    /// Start an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a query that requests [`GAME_FIELDS`].
    #[must_use]
    pub fn games() -> Self {
        Self::new().fields(GAME_FIELDS)
    }

    /// Full-text search.
    #[must_use]
    pub fn search(mut self, text: &str) -> Self {
        self.search = Some(text.to_string());
        self
    }

    /// Fields to return.
    #[must_use]
    pub fn fields(mut self, fields: &[&'static str]) -> Self {
        self.fields.extend_from_slice(fields);
        self
    }

    /// Add a `where` condition. Conditions are joined with `&`.
    #[must_use]
    pub fn filter(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Sort by `field`.
    #[must_use]
    pub fn sort(mut self, field: &'static str, order: SortOrder) -> Self {
        self.sort = Some((field, order));
        self
    }

    /// Limit and offset.
    #[must_use]
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Query for a page of `category` within `windows`.
    #[must_use]
    pub fn category(
        category: GameCategory,
        windows: &ReleaseWindows,
        pagination: Pagination,
    ) -> Self {
        let min = category.min_release_date(windows);
        let query = Self::games().filter(format!("first_release_date > {min}"));
        let query = match category.max_release_date(windows) {
            Some(max) => query.filter(format!("first_release_date < {max}")),
            None => query,
        };

        let query = match category {
            GameCategory::Popular => query
                .filter("rating != null")
                .sort("popularity", SortOrder::Desc),
            GameCategory::RecentlyReleased => query.sort("first_release_date", SortOrder::Desc),
            GameCategory::ComingSoon => query.sort("first_release_date", SortOrder::Asc),
            GameCategory::MostAnticipated => query
                .filter("hypes != null")
                .sort("hypes", SortOrder::Desc),
        };

        query.paginate(pagination)
    }

    /// Query for the games among `ids`.
    #[must_use]
    pub fn ids(ids: &[GameId], sort: &'static str, pagination: Pagination) -> Self {
        let list = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        Self::games()
            .filter(format!("id = ({list})"))
            .sort(sort, SortOrder::Desc)
            .paginate(pagination)
    }

    /// Render the query body.
    #[must_use]
    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if let Some(text) = &self.search {
            parts.push(format!("search \"{}\";", escape(text)));
        }
        if self.fields.is_empty() {
            parts.push("fields *;".to_string());
        } else {
            parts.push(format!("fields {};", self.fields.join(",")));
        }
        if !self.conditions.is_empty() {
            parts.push(format!("where {};", self.conditions.join(" & ")));
        }
        if let Some((field, order)) = self.sort {
            parts.push(format!("sort {field} {};", order.as_str()));
        }
        if let Some(pagination) = self.pagination {
            parts.push(format!(
                "limit {}; offset {};",
                pagination.limit, pagination.offset
            ));
        }

        f.write_str(&parts.join(" "))
    }
}

/// Escape a string literal for use inside double quotes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows() -> ReleaseWindows {
        ReleaseWindows {
            popular_min: 100,
            recently_released_min: 200,
            recently_released_max: 300,
            coming_soon_min: 300,
            most_anticipated_min: 300,
        }
    }

    #[test]
    fn builds_clauses_in_order() {
        let query = Query::new()
            .fields(&["name", "rating"])
            .filter("rating != null")
            .filter("first_release_date > 5")
            .sort("rating", SortOrder::Desc)
            .paginate(Pagination::new(40, 20))
            .build();

        assert_eq!(
            query,
            "fields name,rating; where rating != null & first_release_date > 5; \
             sort rating desc; limit 20; offset 40;"
        );
    }

    #[test]
    fn popular_query() {
        let query = Query::category(GameCategory::Popular, &windows(), Pagination::new(0, 10))
            .build();

        assert!(query.contains("where first_release_date > 100 & rating != null;"));
        assert!(query.contains("sort popularity desc;"));
        assert!(query.ends_with("limit 10; offset 0;"));
    }

    #[test]
    fn recently_released_query_is_bounded() {
        let query = Query::category(
            GameCategory::RecentlyReleased,
            &windows(),
            Pagination::default(),
        )
        .build();

        assert!(query.contains("where first_release_date > 200 & first_release_date < 300;"));
        assert!(query.contains("sort first_release_date desc;"));
    }

    #[test]
    fn coming_soon_and_anticipated_queries() {
        let coming = Query::category(GameCategory::ComingSoon, &windows(), Pagination::default())
            .build();
        assert!(coming.contains("sort first_release_date asc;"));

        let anticipated = Query::category(
            GameCategory::MostAnticipated,
            &windows(),
            Pagination::default(),
        )
        .build();
        assert!(anticipated.contains("& hypes != null;"));
        assert!(anticipated.contains("sort hypes desc;"));
    }

    #[test]
    fn ids_query() {
        let query = Query::ids(
            &[GameId::new(1), GameId::new(2)],
            "total_rating",
            Pagination::default(),
        )
        .build();

        assert!(query.contains("where id = (1,2);"));
        assert!(query.contains("sort total_rating desc;"));
    }

    #[test]
    fn search_is_escaped() {
        let query = Query::games().search(r#"The "Best" \ Game"#).build();
        assert!(query.starts_with(r#"search "The \"Best\" \\ Game";"#));
    }
}
