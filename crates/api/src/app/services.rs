use anyhow::Context;

use catalog_infra::{store, ProductService, StorageConfig};

/// The service type the HTTP layer runs against: any store, random ids, wall clock.
pub type AppServices = ProductService<std::sync::Arc<dyn store::ProductStore>>;

pub fn build_services(storage: &StorageConfig) -> anyhow::Result<AppServices> {
    let store = store::open(storage).with_context(|| format!("failed to open store ({storage:?})"))?;
    Ok(ProductService::with_defaults(store))
}

/// In-memory services (tests/dev).
pub fn in_memory_services() -> AppServices {
    let store: std::sync::Arc<dyn store::ProductStore> =
        std::sync::Arc::new(store::InMemoryProductStore::new());
    ProductService::with_defaults(store)
}
