mod create_anime;
mod delete_anime;
mod get_all_animes;
mod get_anime_by_id;
mod get_animes_by_director;
mod get_animes_by_name;
mod update_anime;

pub use create_anime::{CreateAnime, CreateAnimeHandler};
pub use delete_anime::{DeleteAnime, DeleteAnimeHandler};
pub use get_all_animes::{GetAllAnimes, GetAllAnimesHandler};
pub use get_anime_by_id::{GetAnimeById, GetAnimeByIdHandler};
pub use get_animes_by_director::{GetAnimesByDirector, GetAnimesByDirectorHandler};
pub use get_animes_by_name::{GetAnimesByName, GetAnimesByNameHandler};
pub use update_anime::{UpdateAnime, UpdateAnimeHandler};
