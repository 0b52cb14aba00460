pub mod dispatcher;
pub mod services;
pub mod use_cases;

pub use dispatcher::{AnimeDispatcher, AnimeRequest, AnimeResponse};
