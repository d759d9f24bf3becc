use std::sync::Arc;

use thiserror::Error;

use catalog_core::ProductId;
use catalog_products::Product;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Ordered product map keyed by id.
///
/// ## Contract
///
/// - `get`: point lookup, no side effects.
/// - `values`: every stored product, in ascending key order (not insertion order).
/// - `insert`: unconditional upsert; returns the value previously stored under `id`.
/// - `remove`: deletes `id` if present; returns the removed value.
///
/// Each call is atomic on its own. There are no cross-key transactions; a
/// read-modify-write spanning `get` and `insert` is the caller's to serialize.
pub trait ProductStore: Send + Sync {
    fn get(&self, id: &ProductId) -> StoreResult<Option<Product>>;

    fn values(&self) -> StoreResult<Vec<Product>>;

    fn insert(&self, id: ProductId, product: Product) -> StoreResult<Option<Product>>;

    fn remove(&self, id: &ProductId) -> StoreResult<Option<Product>>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn get(&self, id: &ProductId) -> StoreResult<Option<Product>> {
        (**self).get(id)
    }

    fn values(&self) -> StoreResult<Vec<Product>> {
        (**self).values()
    }

    fn insert(&self, id: ProductId, product: Product) -> StoreResult<Option<Product>> {
        (**self).insert(id, product)
    }

    fn remove(&self, id: &ProductId) -> StoreResult<Option<Product>> {
        (**self).remove(id)
    }
}
