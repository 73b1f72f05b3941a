//! `GamesLocalDataStore` for `RocksStore`.

use async_trait::async_trait;
use gamedge_core::{GameId, Pagination};
use gamedge_data::query::{select_company_developed, select_search, select_similar};
use gamedge_data::{Company, Game, GameCategory, GamesLocalDataStore, GamesStream, StoreError};

use crate::live::live_query;
use crate::rocks::RocksStore;

#[async_trait]
impl GamesLocalDataStore for RocksStore {
    async fn save_games(&self, games: &[Game]) -> Result<(), StoreError> {
        self.put_games(games)
    }

    async fn get_game(&self, id: GameId) -> Result<Option<Game>, StoreError> {
        RocksStore::get_game(self, id)
    }

    async fn get_company_developed_games(
        &self,
        company: &Company,
        pagination: Pagination,
    ) -> Result<Vec<Game>, StoreError> {
        let games = self.get_games(&company.developed_games)?;
        Ok(select_company_developed(games, pagination))
    }

    async fn get_similar_games(
        &self,
        game: &Game,
        pagination: Pagination,
    ) -> Result<Vec<Game>, StoreError> {
        let games = self.get_games(&game.similar_games)?;
        Ok(select_similar(games, pagination))
    }

    async fn search_games(
        &self,
        query: &str,
        pagination: Pagination,
    ) -> Result<Vec<Game>, StoreError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(select_search(self.list_all_games()?, query, pagination))
    }

    fn observe_games(&self, category: GameCategory, pagination: Pagination) -> GamesStream {
        let store = self.clone();
        live_query(self.changes().subscribe(), move || {
            store.query_category(category, pagination)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use futures::StreamExt;
    use gamedge_core::CompanyId;
    use gamedge_data::ReleaseWindows;
    use tempfile::TempDir;

    use super::*;

    const NOW: i64 = 1_717_200_000;
    const DAY: i64 = 86_400;
    const WAIT: Duration = Duration::from_millis(500);

    fn create_test_store() -> (RocksStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let windows = ReleaseWindows {
            popular_min: NOW - 365 * DAY,
            recently_released_min: NOW - 30 * DAY,
            recently_released_max: NOW,
            coming_soon_min: NOW,
            most_anticipated_min: NOW,
        };
        let store = RocksStore::open_with_release_dates(dir.path(), Arc::new(windows)).unwrap();
        (store, dir)
    }

    fn game(id: u64, name: &str, release_date: Option<i64>) -> Game {
        let mut game = Game::new(GameId::new(id), name);
        game.release_date = release_date;
        game
    }

    #[tokio::test]
    async fn saved_game_reads_back_equal() {
        let (store, _dir) = create_test_store();
        let mut zelda = game(7346, "The Legend of Zelda: Breath of the Wild", Some(NOW - DAY));
        zelda.total_rating = Some(92.5);
        zelda.similar_games = vec![GameId::new(1), GameId::new(2)];

        store.save_games(std::slice::from_ref(&zelda)).await.unwrap();

        let loaded = GamesLocalDataStore::get_game(&store, zelda.id).await.unwrap();
        assert_eq!(loaded, Some(zelda));
    }

    #[tokio::test]
    async fn save_replaces_by_id() {
        let (store, _dir) = create_test_store();
        store.save_games(&[game(1, "Old", None)]).await.unwrap();
        store.save_games(&[game(1, "New", None)]).await.unwrap();

        let loaded = GamesLocalDataStore::get_game(&store, GameId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.name, "New");
    }

    #[tokio::test]
    async fn company_developed_games_newest_first() {
        let (store, _dir) = create_test_store();
        store
            .save_games(&[
                game(1, "First", Some(100)),
                game(2, "Second", Some(200)),
                game(3, "Undated", None),
                game(4, "Someone else's", Some(300)),
            ])
            .await
            .unwrap();

        let company = Company {
            id: CompanyId::new(70),
            name: "Nintendo".to_string(),
            developed_games: vec![GameId::new(1), GameId::new(3), GameId::new(2)],
        };
        let games = store
            .get_company_developed_games(&company, Pagination::default())
            .await
            .unwrap();
        let ids: Vec<_> = games.iter().map(|g| g.id.get()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn similar_games_best_rated_first() {
        let (store, _dir) = create_test_store();
        let mut low = game(2, "Low", None);
        low.total_rating = Some(60.0);
        let mut high = game(3, "High", None);
        high.total_rating = Some(90.0);
        store.save_games(&[low, high]).await.unwrap();

        let mut source = game(1, "Source", None);
        source.similar_games = vec![GameId::new(2), GameId::new(3), GameId::new(4)];

        let games = store
            .get_similar_games(&source, Pagination::new(0, 1))
            .await
            .unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, GameId::new(3));
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let (store, _dir) = create_test_store();
        store
            .save_games(&[
                game(1, "Dark Souls", None),
                game(2, "Dark Souls III", None),
                game(3, "Hollow Knight", None),
            ])
            .await
            .unwrap();

        let found = store
            .search_games("dark souls", Pagination::default())
            .await
            .unwrap();
        assert_eq!(found.len(), 2);

        let blank = store.search_games("   ", Pagination::default()).await.unwrap();
        assert!(blank.is_empty());
    }

    #[tokio::test]
    async fn observer_sees_empty_then_saved_games() {
        let (store, _dir) = create_test_store();
        let mut stream = store.observe_coming_soon_games(Pagination::default());

        let first = tokio::time::timeout(WAIT, stream.next()).await.unwrap();
        assert_eq!(first, Some(Ok(Vec::new())));

        let upcoming = game(1, "Upcoming", Some(NOW + 10 * DAY));
        store.save_games(std::slice::from_ref(&upcoming)).await.unwrap();

        let second = tokio::time::timeout(WAIT, stream.next()).await.unwrap();
        assert_eq!(second, Some(Ok(vec![upcoming])));
    }

    #[tokio::test]
    async fn observer_ignores_unrelated_saves() {
        let (store, _dir) = create_test_store();
        let mut stream = store.observe_coming_soon_games(Pagination::default());
        assert_eq!(stream.next().await, Some(Ok(Vec::new())));

        store
            .save_games(&[game(1, "Old classic", Some(NOW - 5_000 * DAY))])
            .await
            .unwrap();
        assert!(tokio::time::timeout(WAIT, stream.next()).await.is_err());
    }

    #[tokio::test]
    async fn observer_follows_release_date_moves() {
        let (store, _dir) = create_test_store();
        store
            .save_games(&[game(1, "Delayed", Some(NOW - DAY))])
            .await
            .unwrap();

        let mut recent = store.observe_recently_released_games(Pagination::default());
        let first = recent.next().await.unwrap().unwrap();
        assert_eq!(first.len(), 1);

        store
            .save_games(&[game(1, "Delayed", Some(NOW + 90 * DAY))])
            .await
            .unwrap();
        let second = tokio::time::timeout(WAIT, recent.next()).await.unwrap();
        assert_eq!(second, Some(Ok(Vec::new())));
    }

    #[tokio::test]
    async fn observer_popular_empty_then_saved() {
        let (store, _dir) = create_test_store();
        let mut stream = store.observe_popular_games(Pagination::default());

        let first = tokio::time::timeout(WAIT, stream.next()).await.unwrap();
        assert_eq!(first, Some(Ok(Vec::new())));

        let mut hit = game(1, "Hit", Some(NOW - DAY));
        hit.users_rating = Some(88.0);
        hit.popularity = Some(40.0);
        let mut unrated = game(2, "Unrated", Some(NOW - DAY));
        unrated.popularity = Some(99.0);
        store.save_games(&[hit.clone(), unrated]).await.unwrap();

        let second = tokio::time::timeout(WAIT, stream.next()).await.unwrap();
        assert_eq!(second, Some(Ok(vec![hit])));
    }

    #[tokio::test]
    async fn observer_popular_orders_by_popularity() {
        let (store, _dir) = create_test_store();
        let mut niche = game(1, "Niche", Some(NOW - 10 * DAY));
        niche.users_rating = Some(95.0);
        niche.popularity = Some(5.0);
        let mut blockbuster = game(2, "Blockbuster", Some(NOW - 20 * DAY));
        blockbuster.users_rating = Some(70.0);
        blockbuster.popularity = Some(80.0);
        store.save_games(&[niche, blockbuster]).await.unwrap();

        let mut stream = store.observe_popular_games(Pagination::default());
        let games = stream.next().await.unwrap().unwrap();
        let ids: Vec<_> = games.iter().map(|g| g.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn observer_most_anticipated_requires_hype() {
        let (store, _dir) = create_test_store();
        let mut stream = store.observe_most_anticipated_games(Pagination::default());
        assert_eq!(stream.next().await, Some(Ok(Vec::new())));

        store
            .save_games(&[game(1, "Quiet", Some(NOW + 30 * DAY))])
            .await
            .unwrap();
        assert!(tokio::time::timeout(WAIT, stream.next()).await.is_err());

        let mut hyped = game(2, "Hyped", Some(NOW + 60 * DAY));
        hyped.hype_count = Some(120);
        store.save_games(std::slice::from_ref(&hyped)).await.unwrap();

        let next = tokio::time::timeout(WAIT, stream.next()).await.unwrap();
        assert_eq!(next, Some(Ok(vec![hyped])));
    }
}
