pub mod database;

pub use database::AnimeRepositoryImpl;
