use std::sync::Mutex;

use async_trait::async_trait;

use anikore::domain::entities::Anime;
use anikore::domain::repositories::{AnimeRepository, Repository};
use anikore::shared::errors::AppResult;

#[derive(Default)]
struct State {
    rows: Vec<Anime>,
    next_id: i32,
}

/// In-memory stand-in for the Postgres gateway, honoring the same contract:
/// store-assigned ids, `false`/`None` for absence, case-insensitive substring
/// searches.
#[derive(Default)]
pub struct InMemoryAnimeRepository {
    state: Mutex<State>,
}

#[async_trait]
impl Repository<Anime, i32> for InMemoryAnimeRepository {
    async fn create(&self, mut entity: Anime) -> AppResult<Anime> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        entity.id = state.next_id;
        state.rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Anime) -> AppResult<Anime> {
        let mut state = self.state.lock().unwrap();
        if let Some(row) = state.rows.iter_mut().find(|r| r.id == entity.id) {
            *row = entity.clone();
        }
        Ok(entity)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|r| r.id != id);
        Ok(state.rows.len() < before)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Anime>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<Anime>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.clone())
    }
}

#[async_trait]
impl AnimeRepository for InMemoryAnimeRepository {
    async fn get_by_name(&self, name: &str) -> AppResult<Vec<Anime>> {
        let needle = name.to_lowercase();
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_by_director(&self, director: &str) -> AppResult<Vec<Anime>> {
        let needle = director.to_lowercase();
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .filter(|r| {
                r.director
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}
