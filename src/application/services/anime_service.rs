use std::sync::Arc;

use crate::domain::entities::Anime;
use crate::domain::repositories::AnimeRepository;
use crate::shared::errors::AppResult;

/// Thin orchestration between dispatch handlers and the persistence gateway.
/// Pure delegation: handlers depend on this instead of the concrete
/// repository, which keeps the capability set swappable. Carries no
/// invariants of its own.
pub struct AnimeService {
    repository: Arc<dyn AnimeRepository>,
}

impl AnimeService {
    pub fn new(repository: Arc<dyn AnimeRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, anime: Anime) -> AppResult<Anime> {
        self.repository.create(anime).await
    }

    pub async fn update(&self, anime: Anime) -> AppResult<Anime> {
        self.repository.update(anime).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        self.repository.delete(id).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Anime>> {
        self.repository.get_by_id(id).await
    }

    pub async fn get_all(&self) -> AppResult<Vec<Anime>> {
        self.repository.get_all().await
    }

    pub async fn get_by_name(&self, name: &str) -> AppResult<Vec<Anime>> {
        self.repository.get_by_name(name).await
    }

    pub async fn get_by_director(&self, director: &str) -> AppResult<Vec<Anime>> {
        self.repository.get_by_director(director).await
    }
}
