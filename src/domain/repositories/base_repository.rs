use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Generic persistence gateway over an entity type `T` keyed by `K`.
///
/// Absence is a normal, observable outcome at this layer: `delete` reports it
/// as `false` and `get_by_id` as `None`. Handlers escalate absence into a
/// typed error only where their use case requires existence.
#[async_trait]
pub trait Repository<T, K>: Send + Sync {
    /// Insert the entity and return it with the store-assigned key populated.
    /// Store rejections surface as a generic database failure, never as a
    /// typed domain error.
    async fn create(&self, entity: T) -> AppResult<T>;

    /// Overwrite the row matching the entity's key. Existence is the caller's
    /// obligation; behavior on a missing row is undefined at this layer.
    async fn update(&self, entity: T) -> AppResult<T>;

    /// Remove the row with the given key. Returns `false` when no such row
    /// exists.
    async fn delete(&self, id: K) -> AppResult<bool>;

    async fn get_by_id(&self, id: K) -> AppResult<Option<T>>;

    /// Every row, in store-defined order.
    async fn get_all(&self) -> AppResult<Vec<T>>;
}
