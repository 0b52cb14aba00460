/// Test data factories using builder pattern
///
/// Provides convenient methods to create requests with sensible defaults
use anikore::application::use_cases::CreateAnime;

pub struct CreateAnimeFactory {
    name: String,
    director: Option<String>,
    summary: Option<String>,
}

impl Default for CreateAnimeFactory {
    fn default() -> Self {
        Self {
            name: "Test Anime".to_string(),
            director: Some("Test Director".to_string()),
            summary: Some("A perfectly ordinary test synopsis.".to_string()),
        }
    }
}

impl CreateAnimeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn director(mut self, director: Option<&str>) -> Self {
        self.director = director.map(str::to_string);
        self
    }

    pub fn summary(mut self, summary: Option<&str>) -> Self {
        self.summary = summary.map(str::to_string);
        self
    }

    pub fn build(self) -> CreateAnime {
        CreateAnime {
            name: self.name,
            director: self.director,
            summary: self.summary,
        }
    }
}
