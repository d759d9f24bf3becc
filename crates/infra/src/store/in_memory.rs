use std::collections::BTreeMap;
use std::sync::RwLock;

use catalog_core::ProductId;
use catalog_products::Product;

use super::r#trait::{ProductStore, StoreError, StoreResult};

/// In-memory ordered product store.
///
/// Intended for tests/dev. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> StoreResult<usize> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl ProductStore for InMemoryProductStore {
    fn get(&self, id: &ProductId) -> StoreResult<Option<Product>> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(id).cloned())
    }

    fn values(&self) -> StoreResult<Vec<Product>> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.values().cloned().collect())
    }

    fn insert(&self, id: ProductId, product: Product) -> StoreResult<Option<Product>> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(map.insert(id, product))
    }

    fn remove(&self, id: &ProductId) -> StoreResult<Option<Product>> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(map.remove(id))
    }
}
