//! Product storage boundary.
//!
//! An ordered key/value map from product id to `Product`, with exactly four
//! operations: point lookup, full enumeration, upsert and delete. Anything
//! more (validation, timestamps, id generation) lives in the service layer.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileProductStore;
pub use in_memory::InMemoryProductStore;
pub use r#trait::{ProductStore, StoreError, StoreResult};

use std::sync::Arc;

use crate::config::StorageConfig;

/// Open the store described by `config` as a shareable trait object.
pub fn open(config: &StorageConfig) -> StoreResult<Arc<dyn ProductStore>> {
    match config {
        StorageConfig::InMemory => Ok(Arc::new(InMemoryProductStore::new())),
        StorageConfig::File(path) => Ok(Arc::new(FileProductStore::open(path)?)),
    }
}
