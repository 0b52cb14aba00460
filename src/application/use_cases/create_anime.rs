use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::services::AnimeService;
use crate::domain::entities::Anime;
use crate::shared::application::UseCase;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::ValidationReport;

/// Command to add a new anime to the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnime {
    pub name: String,
    pub director: Option<String>,
    pub summary: Option<String>,
}

impl CreateAnime {
    /// Evaluates every field rule and returns the full set of violations.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.require_length("name", &self.name, 3, 255);
        report.optional_length("director", self.director.as_deref(), 3, 255);
        report.optional_length("summary", self.summary.as_deref(), 3, 2000);
        report
    }
}

pub struct CreateAnimeHandler {
    service: Arc<AnimeService>,
}

impl CreateAnimeHandler {
    pub fn new(service: Arc<AnimeService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UseCase<CreateAnime, Anime> for CreateAnimeHandler {
    async fn execute(&self, command: CreateAnime) -> AppResult<Anime> {
        command.validate().into_result()?;

        // The search is substring-based; duplicate detection narrows it to an
        // exact, case-sensitive name match so "Naruto 2" does not collide
        // with an existing "Naruto".
        let same_name = self.service.get_by_name(&command.name).await?;
        if same_name.iter().any(|a| a.name == command.name) {
            return Err(AppError::Duplicate(format!(
                "anime with name '{}' already exists",
                command.name
            )));
        }

        log::debug!("creating anime '{}'", command.name);
        self.service
            .create(Anime::new(command.name, command.director, command.summary))
            .await
    }
}
