//! Plain-text rendering of games and news.

use std::fmt;

use chrono::DateTime;
use gamedge_data::{Article, DataError, Game, Pagination};

/// Format a unix timestamp as a calendar date.
fn format_date(release_date: Option<i64>) -> String {
    release_date
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map_or_else(|| "TBA".to_string(), |date| date.format("%Y-%m-%d").to_string())
}

fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_string(), |rating| format!("{rating:.0}"))
}

/// One line per game: id, release date, rating and name.
#[must_use]
pub fn game_row(game: &Game) -> String {
    format!(
        "{:>8}  {:<10}  {:>3}  {}",
        game.id.get(),
        format_date(game.release_date),
        format_rating(game.total_rating),
        game.name
    )
}

/// A page of games, or a note that there is nothing to show.
#[must_use]
pub fn game_list(games: &[Game]) -> String {
    if games.is_empty() {
        return "No games.".to_string();
    }
    games.iter().map(game_row).collect::<Vec<_>>().join("\n")
}

/// Everything worth showing about one game.
#[must_use]
pub fn game_details(game: &Game) -> String {
    GameDetails(game).to_string()
}

struct GameDetails<'a>(&'a Game);

impl fmt::Display for GameDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        writeln!(f, "{} ({})", game.name, game.id)?;
        writeln!(f, "Released:  {}", format_date(game.release_date))?;
        writeln!(
            f,
            "Rating:    {} (critics {}, users {})",
            format_rating(game.total_rating),
            format_rating(game.critics_rating),
            format_rating(game.users_rating)
        )?;

        let developers: Vec<_> = game.developers().map(|c| c.name.as_str()).collect();
        if !developers.is_empty() {
            writeln!(f, "Developer: {}", developers.join(", "))?;
        }
        if !game.genres.is_empty() {
            let genres: Vec<_> = game.genres.iter().map(|g| g.name.as_str()).collect();
            writeln!(f, "Genres:    {}", genres.join(", "))?;
        }
        if !game.platforms.is_empty() {
            let platforms: Vec<_> =
                game.platforms.iter().map(|p| p.abbreviation.as_str()).collect();
            writeln!(f, "Platforms: {}", platforms.join(", "))?;
        }
        if !game.age_ratings.is_empty() {
            let ratings: Vec<_> = game.age_ratings.iter().map(|r| r.rating.label()).collect();
            writeln!(f, "Ages:      {}", ratings.join(", "))?;
        }
        if let Some(hours) = game.time_to_beat.normally.map(|secs| secs / 3600) {
            writeln!(f, "Length:    ~{hours}h")?;
        }
        if let Some(website) = game.official_website() {
            writeln!(f, "Website:   {}", website.url)?;
        }
        if let Some(summary) = &game.summary {
            write!(f, "\n{summary}\n")?;
        }
        Ok(())
    }
}

/// One article: id, date and title, with the lede underneath.
#[must_use]
pub fn article_row(article: &Article) -> String {
    let mut row = format!(
        "{:>10}  {:<10}  {}",
        article.id.get(),
        format_date(Some(article.publication_date)),
        article.title
    );
    if !article.lede.trim().is_empty() {
        row.push_str("\n            ");
        row.push_str(article.lede.trim());
    }
    row
}

/// A page of news, or a note that there is nothing to show.
#[must_use]
pub fn article_list(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No news.".to_string();
    }
    articles.iter().map(article_row).collect::<Vec<_>>().join("\n")
}

/// A hint pointing at the next page, when the current one came back full.
#[must_use]
pub fn next_page_hint(shown: usize, pagination: Pagination) -> Option<String> {
    if pagination.limit == 0 || shown < pagination.limit as usize {
        return None;
    }
    let next = pagination.next_page();
    Some(format!("More: --offset {} --limit {}", next.offset, next.limit))
}

/// Describe a failed refresh. Cached results are still shown after it.
#[must_use]
pub fn refresh_failure(error: &anyhow::Error) -> String {
    let Some(data_error) = error.downcast_ref::<DataError>() else {
        return format!("Refresh failed: {error:#}");
    };

    let domain = data_error.clone().into_domain_error();
    let reason = domain.message().unwrap_or("service unavailable");
    if domain.is_retriable() {
        format!("Refresh failed: {reason}. Showing cached results; try again later.")
    } else {
        format!("Refresh failed: {reason}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamedge_data::{
        ArticleId, DomainError, GameId, Genre, StoreError, Website, WebsiteCategory,
    };

    #[test]
    fn row_shows_date_and_rating() {
        let mut game = Game::new(GameId::new(1942), "The Witcher 3: Wild Hunt");
        game.release_date = Some(1_431_993_600);
        game.total_rating = Some(93.6);

        let row = game_row(&game);
        assert!(row.contains("2015-05-19"));
        assert!(row.contains(" 94 "));
        assert!(row.ends_with("The Witcher 3: Wild Hunt"));
    }

    #[test]
    fn undated_games_are_tba() {
        let game = Game::new(GameId::new(1), "Hollow Knight: Silksong");
        assert!(game_row(&game).contains("TBA"));
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(game_list(&[]), "No games.");
    }

    #[test]
    fn details_include_website_and_genres() {
        let mut game = Game::new(GameId::new(1942), "The Witcher 3: Wild Hunt");
        game.genres = vec![Genre {
            name: "Role-playing (RPG)".to_string(),
        }];
        game.websites = vec![Website {
            url: "https://thewitcher.com".to_string(),
            category: WebsiteCategory::Official,
            is_trusted: true,
        }];

        let details = game_details(&game);
        assert!(details.contains("Genres:    Role-playing (RPG)"));
        assert!(details.contains("Website:   https://thewitcher.com"));
        assert!(!details.contains("Developer:"));
    }

    #[test]
    fn details_end_with_summary() {
        let mut game = Game::new(GameId::new(1020), "Grand Theft Auto V");
        game.summary = Some("Los Santos.".to_string());

        let details = game_details(&game);
        assert!(details.starts_with("Grand Theft Auto V (1020)\n"));
        assert!(details.ends_with("\nLos Santos.\n"));
    }

    #[test]
    fn article_row_shows_date_title_and_lede() {
        let mut article = Article::new(
            ArticleId::new(1_100_006_173),
            "Cyberpunk 2077 Delayed",
            "https://www.gamespot.com/articles/1100-6173/",
        );
        article.publication_date = 1_603_801_800;
        article.lede = "Again.".to_string();

        let row = article_row(&article);
        assert!(row.starts_with("1100006173  2020-10-27  Cyberpunk 2077 Delayed"));
        assert!(row.ends_with("\n            Again."));
        assert_eq!(article_list(&[]), "No news.");
    }

    #[test]
    fn full_page_points_at_the_next_one() {
        let page = Pagination::new(20, 10);
        assert_eq!(
            next_page_hint(10, page).as_deref(),
            Some("More: --offset 30 --limit 10")
        );
        assert_eq!(next_page_hint(9, page), None);
        assert_eq!(next_page_hint(0, Pagination::new(0, 0)), None);
    }

    #[test]
    fn retriable_refresh_failure_suggests_retrying() {
        let error = anyhow::Error::from(DataError::from(DomainError::NetworkError(
            "connection refused".to_string(),
        )));
        assert_eq!(
            refresh_failure(&error),
            "Refresh failed: connection refused. Showing cached results; try again later."
        );

        let error = anyhow::Error::from(DataError::from(DomainError::ServiceUnavailable));
        assert!(refresh_failure(&error).starts_with("Refresh failed: service unavailable."));
    }

    #[test]
    fn rejected_refresh_shows_server_message_only() {
        let error = anyhow::Error::from(DataError::from(DomainError::ClientError(
            "Syntax Error".to_string(),
        )));
        assert_eq!(refresh_failure(&error), "Refresh failed: Syntax Error");

        let error =
            anyhow::Error::from(DataError::from(StoreError::Database("disk full".to_string())));
        assert!(!refresh_failure(&error).contains("try again"));

        let error = anyhow::anyhow!("IGDB credentials missing");
        assert_eq!(refresh_failure(&error), "Refresh failed: IGDB credentials missing");
    }
}
