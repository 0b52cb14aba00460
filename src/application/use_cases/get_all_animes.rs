use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::AnimeService;
use crate::domain::entities::Anime;
use crate::shared::application::UseCase;
use crate::shared::errors::AppResult;

/// Query for every anime in the catalog. An empty catalog is a valid result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetAllAnimes;

pub struct GetAllAnimesHandler {
    service: Arc<AnimeService>,
}

impl GetAllAnimesHandler {
    pub fn new(service: Arc<AnimeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UseCase<GetAllAnimes, Vec<Anime>> for GetAllAnimesHandler {
    async fn execute(&self, _query: GetAllAnimes) -> AppResult<Vec<Anime>> {
        self.service.get_all().await
    }
}
