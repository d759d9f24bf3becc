//! Infrastructure layer: product storage, the service operations, config.

pub mod config;
pub mod service;
pub mod store;

pub use config::{AppConfig, StorageConfig};
pub use service::{ProductService, ServiceError, ServiceResult};
pub use store::{FileProductStore, InMemoryProductStore, ProductStore, StoreError, StoreResult};
