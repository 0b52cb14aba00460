use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::Anime;
use crate::domain::repositories::{AnimeRepository, Repository};
use crate::infrastructure::database::models::{AnimeChangeset, AnimeRow, NewAnime};
use crate::infrastructure::database::schema::animes;
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

/// Diesel/Postgres implementation of the anime persistence gateway. Every
/// operation runs the blocking diesel call on the blocking pool.
pub struct AnimeRepositoryImpl {
    db: Arc<Database>,
}

impl AnimeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Anime, i32> for AnimeRepositoryImpl {
    async fn create(&self, entity: Anime) -> AppResult<Anime> {
        let db = Arc::clone(&self.db);
        let new_row = NewAnime::from(&entity);

        let row = task::spawn_blocking(move || -> AppResult<AnimeRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(animes::table)
                .values(&new_row)
                .get_result::<AnimeRow>(&mut conn)?;
            Ok(row)
        })
        .await??;

        log::debug!("inserted anime '{}' with id {}", row.name, row.id);
        Ok(row.into())
    }

    async fn update(&self, entity: Anime) -> AppResult<Anime> {
        let db = Arc::clone(&self.db);
        let id = entity.id;
        let changes = AnimeChangeset::from(&entity);

        let row = task::spawn_blocking(move || -> AppResult<AnimeRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::update(animes::table.filter(animes::id.eq(id)))
                .set(&changes)
                .get_result::<AnimeRow>(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        let deleted = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let deleted =
                diesel::delete(animes::table.filter(animes::id.eq(id))).execute(&mut conn)?;
            Ok(deleted)
        })
        .await??;

        Ok(deleted > 0)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Anime>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<AnimeRow>> {
            let mut conn = db.get_connection()?;
            let row = animes::table
                .filter(animes::id.eq(id))
                .first::<AnimeRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(Into::into))
    }

    async fn get_all(&self) -> AppResult<Vec<Anime>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeRow>> {
            let mut conn = db.get_connection()?;
            let rows = animes::table.load::<AnimeRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl AnimeRepository for AnimeRepositoryImpl {
    async fn get_by_name(&self, name: &str) -> AppResult<Vec<Anime>> {
        let db = Arc::clone(&self.db);
        let pattern = format!("%{}%", name);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeRow>> {
            let mut conn = db.get_connection()?;
            let rows = animes::table
                .filter(animes::name.ilike(&pattern))
                .load::<AnimeRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_director(&self, director: &str) -> AppResult<Vec<Anime>> {
        let db = Arc::clone(&self.db);
        let pattern = format!("%{}%", director);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeRow>> {
            let mut conn = db.get_connection()?;
            // NULL directors fall out of the ILIKE predicate on their own.
            let rows = animes::table
                .filter(animes::director.ilike(&pattern))
                .load::<AnimeRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
