//! Product operations (application-level orchestration).
//!
//! `ProductService` composes a `ProductStore` with the pure record transforms
//! from `catalog-products`. Every operation is a single lookup and at most a
//! single write:
//!
//! ```text
//! request
//!   ↓
//! 1. Load the record by id (NotFound if absent)
//!   ↓
//! 2. Validate input (before anything is written)
//!   ↓
//! 3. Build the new record (pure transform)
//!   ↓
//! 4. Write it back under the same id
//! ```
//!
//! Ids and timestamps come from injected capabilities so tests stay
//! deterministic.

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use tracing::{debug, info, warn};

use catalog_core::{Clock, DomainError, IdGenerator, ProductId, SystemClock, UuidIdGenerator};
use catalog_products::{NewProduct, Product, ProductChanges, Rating};

use crate::store::{ProductStore, StoreError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The product catalog operations.
///
/// ## Generic Parameters
///
/// - `S`: product store (`InMemoryProductStore`, `FileProductStore`, `Arc<dyn ProductStore>`)
/// - `I`: id generator, random UUIDs by default
/// - `C`: clock, wall clock by default
///
/// ## Concurrency
///
/// Mutating operations hold `write_guard` for their whole read-modify-write,
/// so two concurrent updates to one product cannot interleave between the
/// read and the write. There is no version check: the later call wins.
#[derive(Debug)]
pub struct ProductService<S, I = UuidIdGenerator, C = SystemClock> {
    store: S,
    ids: I,
    clock: C,
    write_guard: Mutex<()>,
}

impl<S> ProductService<S> {
    /// Service with random ids and the wall clock.
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, UuidIdGenerator, SystemClock)
    }
}

impl<S, I, C> ProductService<S, I, C> {
    pub fn new(store: S, ids: I, clock: C) -> Self {
        Self {
            store,
            ids,
            clock,
            write_guard: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S, I, C> ProductService<S, I, C>
where
    S: ProductStore,
    I: IdGenerator,
    C: Clock,
{
    fn lock_writes(&self) -> ServiceResult<MutexGuard<'_, ()>> {
        self.write_guard
            .lock()
            .map_err(|_| ServiceError::Store(StoreError::Poisoned))
    }

    fn load(&self, id: &ProductId) -> ServiceResult<Product> {
        match self.store.get(id)? {
            Some(product) => Ok(product),
            None => {
                warn!(product_id = %id, "product not found");
                Err(DomainError::not_found(id.as_str()).into())
            }
        }
    }

    /// All stored products in key order.
    pub fn list_products(&self) -> ServiceResult<Vec<Product>> {
        let products = self.store.values()?;
        debug!(count = products.len(), "listed products");
        Ok(products)
    }

    pub fn get_product(&self, id: &ProductId) -> ServiceResult<Product> {
        let product = self.load(id)?;
        debug!(product_id = %id, "loaded product");
        Ok(product)
    }

    /// Validate the payload, assign a fresh id and store the new record.
    pub fn add_product(&self, payload: NewProduct) -> ServiceResult<Product> {
        if let Err(e) = payload.validate() {
            warn!(error = %e, "rejected new product");
            return Err(e.into());
        }

        let _guard = self.lock_writes()?;
        let id = self.ids.next_id();
        let product = Product::create(id.clone(), payload, self.clock.now())?;
        self.store.insert(id.clone(), product.clone())?;

        info!(product_id = %id, "product created");
        Ok(product)
    }

    /// Append `rating` to the product's history.
    ///
    /// An out-of-range rating fails with `RatingOutOfRange` and leaves the
    /// stored record untouched.
    pub fn rate_product(&self, id: &ProductId, rating: i64) -> ServiceResult<Product> {
        let _guard = self.lock_writes()?;
        let product = self.load(id)?;

        let rating = match Rating::new(rating) {
            Ok(r) => r,
            Err(e) => {
                warn!(product_id = %id, rating, "rejected rating");
                return Err(e.into());
            }
        };

        let rated = product.rated(rating);
        self.store.insert(id.clone(), rated.clone())?;

        info!(product_id = %id, rating = rating.value(), total = rated.ratings().len(), "product rated");
        Ok(rated)
    }

    /// Mean rating rounded to two decimals, `0.0` if there are no ratings yet.
    pub fn average_rating(&self, id: &ProductId) -> ServiceResult<f64> {
        let average = self.load(id)?.average_rating();
        debug!(product_id = %id, average, "computed average rating");
        Ok(average)
    }

    /// Overlay `changes` onto the stored record and stamp `updated_at`.
    pub fn update_product(&self, id: &ProductId, changes: ProductChanges) -> ServiceResult<Product> {
        let _guard = self.lock_writes()?;
        let product = self.load(id)?;

        let updated = product.apply(changes, self.clock.now());
        self.store.insert(id.clone(), updated.clone())?;

        info!(product_id = %id, "product updated");
        Ok(updated)
    }

    /// Remove the product and return what was stored.
    pub fn delete_product(&self, id: &ProductId) -> ServiceResult<Product> {
        let _guard = self.lock_writes()?;
        match self.store.remove(id)? {
            Some(removed) => {
                info!(product_id = %id, "product deleted");
                Ok(removed)
            }
            None => {
                warn!(product_id = %id, "product not found");
                Err(DomainError::not_found(id.as_str()).into())
            }
        }
    }
}
