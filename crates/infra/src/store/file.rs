//! File-backed product store.
//!
//! The whole ordered map lives in memory and is written through to a single
//! JSON snapshot file (`{"<id>": <product>, ...}`) after every mutation. The
//! snapshot is replaced atomically by writing a sibling temp file and renaming
//! it over the original, so a crash mid-write leaves the previous snapshot
//! intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{debug, info};

use catalog_core::ProductId;
use catalog_products::Product;

use super::r#trait::{ProductStore, StoreError, StoreResult};

#[derive(Debug)]
pub struct FileProductStore {
    path: PathBuf,
    inner: RwLock<BTreeMap<ProductId, Product>>,
}

impl FileProductStore {
    /// Open (or lazily create) the snapshot at `path`.
    ///
    /// A missing file is an empty store; the file is first written on the
    /// first mutation. Missing parent directories are created.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let map: BTreeMap<ProductId, Product> = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(path = %path.display(), products = map.len(), "opened product snapshot");

        Ok(Self {
            path,
            inner: RwLock::new(map),
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persist(&self, map: &BTreeMap<ProductId, Product>) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(map)?;
        let tmp = self.temp_path();
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), products = map.len(), "wrote product snapshot");
        Ok(())
    }
}

impl ProductStore for FileProductStore {
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
        let previous = map.insert(id.clone(), product);

        // Memory must not run ahead of the snapshot.
        if let Err(e) = self.persist(&map) {
            match &previous {
                Some(old) => map.insert(id, old.clone()),
                None => map.remove(&id),
            };
            return Err(e);
        }

        Ok(previous)
    }

    fn remove(&self, id: &ProductId) -> StoreResult<Option<Product>> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let Some(removed) = map.remove(id) else {
            return Ok(None);
        };

        if let Err(e) = self.persist(&map) {
            map.insert(id.clone(), removed);
            return Err(e);
        }

        Ok(Some(removed))
    }
}
