use async_trait::async_trait;

use crate::domain::entities::Anime;
use crate::shared::errors::AppResult;

use super::Repository;

/// Anime-specific search surface on top of the generic CRUD gateway. Every
/// future entity reuses the same four primitives; each one declares its own
/// query shapes on a narrowing like this.
#[async_trait]
pub trait AnimeRepository: Repository<Anime, i32> {
    /// Case-insensitive substring match over `name`. Empty result on no match.
    async fn get_by_name(&self, name: &str) -> AppResult<Vec<Anime>>;

    /// Case-insensitive substring match over `director`. Rows without a
    /// director never match.
    async fn get_by_director(&self, director: &str) -> AppResult<Vec<Anime>>;
}

#[cfg(test)]
mockall::mock! {
    pub AnimeRepository {}

    #[async_trait]
    impl Repository<Anime, i32> for AnimeRepository {
        async fn create(&self, entity: Anime) -> AppResult<Anime>;
        async fn update(&self, entity: Anime) -> AppResult<Anime>;
        async fn delete(&self, id: i32) -> AppResult<bool>;
        async fn get_by_id(&self, id: i32) -> AppResult<Option<Anime>>;
        async fn get_all(&self) -> AppResult<Vec<Anime>>;
    }

    #[async_trait]
    impl AnimeRepository for AnimeRepository {
        async fn get_by_name(&self, name: &str) -> AppResult<Vec<Anime>>;
        async fn get_by_director(&self, director: &str) -> AppResult<Vec<Anime>>;
    }
}
