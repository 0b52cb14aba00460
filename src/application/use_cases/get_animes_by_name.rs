use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::AnimeService;
use crate::domain::entities::Anime;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

/// Query for animes whose name contains the given term, case-insensitively.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAnimesByName {
    pub name: String,
}

pub struct GetAnimesByNameHandler {
    service: Arc<AnimeService>,
}

impl GetAnimesByNameHandler {
    pub fn new(service: Arc<AnimeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UseCase<GetAnimesByName, Vec<Anime>> for GetAnimesByNameHandler {
    async fn execute(&self, query: GetAnimesByName) -> AppResult<Vec<Anime>> {
        if query.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "name must not be empty".to_string(),
            ));
        }
        self.service.get_by_name(&query.name).await
    }
}
