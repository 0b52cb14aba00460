mod anime_repository;
mod base_repository;

pub use anime_repository::AnimeRepository;
pub use base_repository::Repository;

#[cfg(test)]
pub use anime_repository::MockAnimeRepository;
