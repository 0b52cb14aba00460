mod anime_repository_impl;

pub use anime_repository_impl::AnimeRepositoryImpl;
