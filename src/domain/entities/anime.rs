use serde::{Deserialize, Serialize};

/// The catalog entity. A passive value container: field rules are enforced by
/// the request layer before an `Anime` is ever constructed, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anime {
    /// Store-assigned identity, immutable after creation.
    pub id: i32,
    pub name: String,
    pub director: Option<String>,
    pub summary: Option<String>,
}

impl Anime {
    /// An entity that has not been persisted yet. The store assigns the real
    /// id on insert.
    pub fn new(
        name: impl Into<String>,
        director: Option<String>,
        summary: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            director,
            summary,
        }
    }

    pub fn with_id(
        id: i32,
        name: impl Into<String>,
        director: Option<String>,
        summary: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            director,
            summary,
        }
    }
}
