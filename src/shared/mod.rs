pub mod application;
pub mod database;
pub mod errors;
pub mod logger;
pub mod validation;

pub use database::{Database, DbConnection, DbPool};
