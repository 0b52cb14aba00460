use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::AnimeService;
use crate::domain::entities::Anime;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::ValidationReport;

/// Command to fully overwrite an existing anime's fields. Uniqueness of the
/// name is not re-checked on update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnime {
    pub id: i32,
    pub name: String,
    pub director: Option<String>,
    pub summary: Option<String>,
}

impl UpdateAnime {
    /// Evaluates every field rule and returns the full set of violations.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.require_length("name", &self.name, 3, 255);
        report.optional_length("director", self.director.as_deref(), 3, 255);
        report.optional_length("summary", self.summary.as_deref(), 3, 2000);
        report
    }
}

pub struct UpdateAnimeHandler {
    service: Arc<AnimeService>,
}

impl UpdateAnimeHandler {
    pub fn new(service: Arc<AnimeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UseCase<UpdateAnime, bool> for UpdateAnimeHandler {
    async fn execute(&self, command: UpdateAnime) -> AppResult<bool> {
        command.validate().into_result()?;

        if self.service.get_by_id(command.id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "anime with id {} not found",
                command.id
            )));
        }

        log::debug!("updating anime {}", command.id);
        self.service
            .update(Anime::with_id(
                command.id,
                command.name,
                command.director,
                command.summary,
            ))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAnimeRepository;

    fn handler(repo: MockAnimeRepository) -> UpdateAnimeHandler {
        UpdateAnimeHandler::new(Arc::new(AnimeService::new(Arc::new(repo))))
    }

    #[tokio::test]
    async fn overwrites_all_fields_when_entity_exists() {
        let mut repo = MockAnimeRepository::new();
        repo.expect_get_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(Anime::with_id(1, "Naruto", Some("Old".into()), None))));
        repo.expect_update()
            .withf(|anime| {
                anime.id == 1
                    && anime.name == "Naruto Shippuden"
                    && anime.director.is_none()
                    && anime.summary.as_deref() == Some("The sequel.")
            })
            .returning(|anime| Ok(anime));

        let updated = handler(repo)
            .execute(UpdateAnime {
                id: 1,
                name: "Naruto Shippuden".to_string(),
                director: None,
                summary: Some("The sequel.".to_string()),
            })
            .await
            .unwrap();
        assert!(updated);
    }

    #[tokio::test]
    async fn missing_entity_is_not_found_and_store_is_unchanged() {
        let mut repo = MockAnimeRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let err = handler(repo)
            .execute(UpdateAnime {
                id: 99,
                name: "Naruto".to_string(),
                director: None,
                summary: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_fields_fail_before_the_existence_check() {
        let repo = MockAnimeRepository::new();

        let err = handler(repo)
            .execute(UpdateAnime {
                id: 1,
                name: String::new(),
                director: None,
                summary: None,
            })
            .await
            .unwrap_err();

        match err {
            AppError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "name");
                assert!(violations[0].message.contains("at least 3"));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }
}
