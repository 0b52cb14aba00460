use serde::Serialize;
use thiserror::Error;

use crate::shared::validation::FieldViolation;

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Typed failures surfaced by handlers. The boundary translates these into
/// transport status codes; the core's only obligation is to raise the
/// correctly-typed failure.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    /// One or more field constraints violated on a command. Carries the full
    /// set of violations, not just the first one hit.
    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Transport status a boundary translator reports for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) | AppError::Duplicate(_) | AppError::InvalidInput(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Database(_) => 500,
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::Database(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Database(format!("Blocking task failed: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
