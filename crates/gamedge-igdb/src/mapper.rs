//! Conversion from IGDB wire entities to gamedge entities.

use gamedge_core::{CompanyId, GameId};
use gamedge_data::{
    AgeRating, AgeRatingCategory, AgeRatingType, Company, Game, Genre, Image, InvolvedCompany,
    Keyword, Mode, Platform, PlayerPerspective, Theme, TimeToBeat, Website, WebsiteCategory,
};

use crate::entities::{
    ApiAgeRating, ApiCompany, ApiGame, ApiImage, ApiInvolvedCompany, ApiTimeToBeat, ApiWebsite,
};

/// Maps wire games to domain games.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityMapper;

impl EntityMapper {
    /// Create a mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Convert one game. List order is preserved.
    #[must_use]
    pub fn map_to_game(&self, game: ApiGame) -> Game {
        Game {
            id: GameId::new(game.id),
            hype_count: game.hype_count,
            release_date: game.release_date,
            critics_rating: game.critics_rating,
            users_rating: game.users_rating,
            total_rating: game.total_rating,
            popularity: game.popularity,
            name: game.name,
            summary: game.summary,
            storyline: game.storyline,
            cover: game.cover.map(map_image),
            time_to_beat: game.time_to_beat.map(map_time_to_beat).unwrap_or_default(),
            age_ratings: game.age_ratings.into_iter().map(map_age_rating).collect(),
            artworks: game.artworks.into_iter().map(map_image).collect(),
            screenshots: game.screenshots.into_iter().map(map_image).collect(),
            genres: game
                .genres
                .into_iter()
                .map(|genre| Genre { name: genre.name })
                .collect(),
            platforms: game
                .platforms
                .into_iter()
                .map(|platform| Platform {
                    abbreviation: platform.abbreviation,
                })
                .collect(),
            player_perspectives: game
                .player_perspectives
                .into_iter()
                .map(|perspective| PlayerPerspective {
                    name: perspective.name,
                })
                .collect(),
            themes: game
                .themes
                .into_iter()
                .map(|theme| Theme { name: theme.name })
                .collect(),
            modes: game
                .modes
                .into_iter()
                .map(|mode| Mode { name: mode.name })
                .collect(),
            keywords: game
                .keywords
                .into_iter()
                .map(|keyword| Keyword { name: keyword.name })
                .collect(),
            involved_companies: game
                .involved_companies
                .into_iter()
                .map(map_involved_company)
                .collect(),
            websites: game.websites.into_iter().map(map_website).collect(),
            similar_games: game.similar_games.into_iter().map(GameId::new).collect(),
        }
    }

    /// Convert a page of games.
    #[must_use]
    pub fn map_to_games(&self, games: Vec<ApiGame>) -> Vec<Game> {
        games.into_iter().map(|game| self.map_to_game(game)).collect()
    }
}

fn map_image(image: ApiImage) -> Image {
    Image {
        width: image.width,
        height: image.height,
        url: absolute_url(image.url),
    }
}

/// IGDB serves image URLs without a scheme.
fn absolute_url(url: String) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url
    }
}

fn map_time_to_beat(time_to_beat: ApiTimeToBeat) -> TimeToBeat {
    TimeToBeat {
        completely: time_to_beat.completely,
        hastily: time_to_beat.hastily,
        normally: time_to_beat.normally,
    }
}

fn map_age_rating(age_rating: ApiAgeRating) -> AgeRating {
    let category = match age_rating.category {
        1 => AgeRatingCategory::Esrb,
        2 => AgeRatingCategory::Pegi,
        _ => AgeRatingCategory::Unknown,
    };
    let rating = match age_rating.rating {
        1 => AgeRatingType::Three,
        2 => AgeRatingType::Seven,
        3 => AgeRatingType::Twelve,
        4 => AgeRatingType::Sixteen,
        5 => AgeRatingType::Eighteen,
        6 => AgeRatingType::RatingPending,
        7 => AgeRatingType::EarlyChildhood,
        8 => AgeRatingType::Everyone,
        9 => AgeRatingType::EveryoneTenPlus,
        10 => AgeRatingType::Teen,
        11 => AgeRatingType::Mature,
        12 => AgeRatingType::AdultsOnly,
        _ => AgeRatingType::Unknown,
    };

    AgeRating { category, rating }
}

fn map_involved_company(involved: ApiInvolvedCompany) -> InvolvedCompany {
    InvolvedCompany {
        company: map_company(involved.company),
        is_developer: involved.developer,
        is_publisher: involved.publisher,
        is_porter: involved.porting,
    }
}

fn map_company(company: ApiCompany) -> Company {
    Company {
        id: CompanyId::new(company.id),
        name: company.name,
        developed_games: company.developed.into_iter().map(GameId::new).collect(),
    }
}

fn map_website(website: ApiWebsite) -> Website {
    let category = match website.category {
        1 => WebsiteCategory::Official,
        2 => WebsiteCategory::Wikia,
        3 => WebsiteCategory::Wikipedia,
        4 => WebsiteCategory::Facebook,
        5 => WebsiteCategory::Twitter,
        6 => WebsiteCategory::Twitch,
        8 => WebsiteCategory::Instagram,
        9 => WebsiteCategory::Youtube,
        10 => WebsiteCategory::Iphone,
        11 => WebsiteCategory::Ipad,
        12 => WebsiteCategory::Android,
        13 => WebsiteCategory::Steam,
        14 => WebsiteCategory::Reddit,
        15 => WebsiteCategory::Itch,
        16 => WebsiteCategory::EpicGames,
        17 => WebsiteCategory::Gog,
        18 => WebsiteCategory::Discord,
        _ => WebsiteCategory::Unknown,
    };

    Website {
        url: website.url,
        category,
        is_trusted: website.trusted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ApiNamed, ApiPlatform};

    fn witcher() -> ApiGame {
        ApiGame {
            id: 1942,
            hype_count: Some(45),
            release_date: Some(1_431_993_600),
            critics_rating: Some(93.5),
            users_rating: Some(94.1),
            total_rating: Some(93.8),
            popularity: Some(12.4),
            name: "The Witcher 3: Wild Hunt".to_string(),
            summary: Some("RPG".to_string()),
            cover: Some(ApiImage {
                width: Some(264),
                height: Some(352),
                url: "//images.igdb.com/igdb/image/upload/t_thumb/co1wyy.jpg".to_string(),
            }),
            time_to_beat: Some(ApiTimeToBeat {
                completely: Some(636_000),
                hastily: None,
                normally: Some(180_000),
            }),
            age_ratings: vec![
                ApiAgeRating { category: 1, rating: 11 },
                ApiAgeRating { category: 2, rating: 5 },
                ApiAgeRating { category: 9, rating: 99 },
            ],
            genres: vec![
                ApiNamed { name: "Role-playing (RPG)".to_string() },
                ApiNamed { name: "Adventure".to_string() },
            ],
            platforms: vec![ApiPlatform { abbreviation: "PC".to_string() }],
            modes: vec![ApiNamed { name: "Single player".to_string() }],
            involved_companies: vec![ApiInvolvedCompany {
                company: ApiCompany {
                    id: 908,
                    name: "CD Projekt RED".to_string(),
                    developed: vec![1942, 472],
                },
                developer: true,
                publisher: false,
                porting: false,
            }],
            websites: vec![
                ApiWebsite {
                    url: "https://thewitcher.com".to_string(),
                    category: 1,
                    trusted: true,
                },
                ApiWebsite {
                    url: "https://example.com".to_string(),
                    category: 42,
                    trusted: false,
                },
            ],
            similar_games: vec![472, 1020],
            ..ApiGame::default()
        }
    }

    #[test]
    fn scalar_fields_are_copied() {
        let game = EntityMapper::new().map_to_game(witcher());

        assert_eq!(game.id, GameId::new(1942));
        assert_eq!(game.hype_count, Some(45));
        assert_eq!(game.release_date, Some(1_431_993_600));
        assert_eq!(game.critics_rating, Some(93.5));
        assert_eq!(game.users_rating, Some(94.1));
        assert_eq!(game.total_rating, Some(93.8));
        assert_eq!(game.popularity, Some(12.4));
        assert_eq!(game.name, "The Witcher 3: Wild Hunt");
        assert_eq!(game.summary.as_deref(), Some("RPG"));
        assert!(game.storyline.is_none());
        assert_eq!(game.time_to_beat.completely, Some(636_000));
        assert_eq!(game.time_to_beat.hastily, None);
    }

    #[test]
    fn image_urls_get_a_scheme() {
        let game = EntityMapper::new().map_to_game(witcher());
        let cover = game.cover.unwrap();

        assert_eq!(
            cover.url,
            "https://images.igdb.com/igdb/image/upload/t_thumb/co1wyy.jpg"
        );
        assert_eq!(cover.width, Some(264));
        assert_eq!(absolute_url("https://a/b.png".to_string()), "https://a/b.png");
    }

    #[test]
    fn lists_keep_order() {
        let game = EntityMapper::new().map_to_game(witcher());

        let genres: Vec<_> = game.genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(genres, vec!["Role-playing (RPG)", "Adventure"]);
        assert_eq!(game.similar_games, vec![GameId::new(472), GameId::new(1020)]);
        assert_eq!(game.platforms[0].abbreviation, "PC");
        assert_eq!(game.modes[0].name, "Single player");
    }

    #[test]
    fn enum_codes_map_with_unknown_fallback() {
        let game = EntityMapper::new().map_to_game(witcher());

        assert_eq!(
            game.age_ratings,
            vec![
                AgeRating {
                    category: AgeRatingCategory::Esrb,
                    rating: AgeRatingType::Mature
                },
                AgeRating {
                    category: AgeRatingCategory::Pegi,
                    rating: AgeRatingType::Eighteen
                },
                AgeRating {
                    category: AgeRatingCategory::Unknown,
                    rating: AgeRatingType::Unknown
                },
            ]
        );
        assert_eq!(game.websites[0].category, WebsiteCategory::Official);
        assert_eq!(game.websites[1].category, WebsiteCategory::Unknown);
        assert!(game.websites[0].is_trusted);
    }

    #[test]
    fn companies_are_mapped() {
        let game = EntityMapper::new().map_to_game(witcher());
        let developer = game.developers().next().unwrap();

        assert_eq!(developer.id, CompanyId::new(908));
        assert_eq!(
            developer.developed_games,
            vec![GameId::new(1942), GameId::new(472)]
        );
    }
}
