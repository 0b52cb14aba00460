mod anime_service;

pub use anime_service::AnimeService;
