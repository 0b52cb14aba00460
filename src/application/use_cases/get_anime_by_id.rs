use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::AnimeService;
use crate::domain::entities::Anime;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

/// Query for a single anime by its identity. Absence is `None`, not a failure.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAnimeById {
    pub id: i32,
}

pub struct GetAnimeByIdHandler {
    service: Arc<AnimeService>,
}

impl GetAnimeByIdHandler {
    pub fn new(service: Arc<AnimeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UseCase<GetAnimeById, Option<Anime>> for GetAnimeByIdHandler {
    async fn execute(&self, query: GetAnimeById) -> AppResult<Option<Anime>> {
        if query.id <= 0 {
            return Err(AppError::InvalidInput(
                "id must be greater than zero".to_string(),
            ));
        }
        self.service.get_by_id(query.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAnimeRepository;

    fn handler(repo: MockAnimeRepository) -> GetAnimeByIdHandler {
        GetAnimeByIdHandler::new(Arc::new(AnimeService::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn non_positive_id_is_rejected_without_querying_the_store() {
        // No expectations set: a store call would panic the test.
        for id in [0, -3] {
            let repo = MockAnimeRepository::new();
            let err = handler(repo).execute(GetAnimeById { id }).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }
    }

    #[tokio::test]
    async fn absence_is_none_not_an_error() {
        let mut repo = MockAnimeRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        assert_eq!(handler(repo).execute(GetAnimeById { id: 7 }).await.unwrap(), None);
    }

    #[tokio::test]
    async fn returns_the_matching_entity() {
        let mut repo = MockAnimeRepository::new();
        repo.expect_get_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(Anime::with_id(1, "Naruto", None, None))));

        let found = handler(repo).execute(GetAnimeById { id: 1 }).await.unwrap();
        assert_eq!(found.unwrap().name, "Naruto");
    }
}
