use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Base trait for command and query handlers: one request type in, its
/// declared result type out. Each request pairs with exactly one handler.
#[async_trait]
pub trait UseCase<TRequest, TResult> {
    /// Execute the use case with the given request
    async fn execute(&self, request: TRequest) -> AppResult<TResult>;
}
