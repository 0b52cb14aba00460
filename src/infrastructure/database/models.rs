use diesel::prelude::*;

use crate::domain::entities::Anime;
use crate::infrastructure::database::schema::animes;

/// Row as stored in the `animes` table.
#[derive(Debug, Queryable, Identifiable)]
#[diesel(table_name = animes)]
pub struct AnimeRow {
    pub id: i32,
    pub name: String,
    pub director: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = animes)]
pub struct NewAnime {
    pub name: String,
    pub director: Option<String>,
    pub summary: Option<String>,
}

/// Update is a full overwrite, so `None` must write NULL rather than skip
/// the column.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = animes)]
#[diesel(treat_none_as_null = true)]
pub struct AnimeChangeset {
    pub name: String,
    pub director: Option<String>,
    pub summary: Option<String>,
}

impl From<AnimeRow> for Anime {
    fn from(row: AnimeRow) -> Self {
        Anime {
            id: row.id,
            name: row.name,
            director: row.director,
            summary: row.summary,
        }
    }
}

impl From<&Anime> for NewAnime {
    fn from(entity: &Anime) -> Self {
        NewAnime {
            name: entity.name.clone(),
            director: entity.director.clone(),
            summary: entity.summary.clone(),
        }
    }
}

impl From<&Anime> for AnimeChangeset {
    fn from(entity: &Anime) -> Self {
        AnimeChangeset {
            name: entity.name.clone(),
            director: entity.director.clone(),
            summary: entity.summary.clone(),
        }
    }
}
