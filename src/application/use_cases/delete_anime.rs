use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::AnimeService;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

/// Command to remove an anime from the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAnime {
    pub id: i32,
}

pub struct DeleteAnimeHandler {
    service: Arc<AnimeService>,
}

impl DeleteAnimeHandler {
    pub fn new(service: Arc<AnimeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UseCase<DeleteAnime, bool> for DeleteAnimeHandler {
    async fn execute(&self, command: DeleteAnime) -> AppResult<bool> {
        if self.service.get_by_id(command.id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "anime with id {} not found",
                command.id
            )));
        }

        log::debug!("deleting anime {}", command.id);
        self.service.delete(command.id).await?;
        Ok(true)
    }
}
