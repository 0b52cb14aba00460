use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::AnimeService;
use crate::domain::entities::Anime;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};

/// Query for animes whose director contains the given term,
/// case-insensitively. Entries without a director never match.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAnimesByDirector {
    pub director: String,
}

pub struct GetAnimesByDirectorHandler {
    service: Arc<AnimeService>,
}

impl GetAnimesByDirectorHandler {
    pub fn new(service: Arc<AnimeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UseCase<GetAnimesByDirector, Vec<Anime>> for GetAnimesByDirectorHandler {
    async fn execute(&self, query: GetAnimesByDirector) -> AppResult<Vec<Anime>> {
        if query.director.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "director must not be empty".to_string(),
            ));
        }
        self.service.get_by_director(&query.director).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAnimeRepository;

    fn handler(repo: MockAnimeRepository) -> GetAnimesByDirectorHandler {
        GetAnimesByDirectorHandler::new(Arc::new(AnimeService::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn empty_director_is_rejected_without_querying_the_store() {
        let repo = MockAnimeRepository::new();
        let err = handler(repo)
            .execute(GetAnimesByDirector {
                director: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn forwards_the_search_term_to_the_gateway() {
        let mut repo = MockAnimeRepository::new();
        repo.expect_get_by_director()
            .withf(|director| director == "miyazaki")
            .returning(|_| {
                Ok(vec![Anime::with_id(
                    1,
                    "Spirited Away",
                    Some("Hayao Miyazaki".into()),
                    None,
                )])
            });

        let animes = handler(repo)
            .execute(GetAnimesByDirector {
                director: "miyazaki".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(animes.len(), 1);
        assert_eq!(animes[0].director.as_deref(), Some("Hayao Miyazaki"));
    }
}
