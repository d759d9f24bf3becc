//! Product identifiers and the id-generation capability.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a product: an opaque string key in the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of fresh product identifiers.
///
/// The store overwrites on duplicate keys, so implementations must produce
/// globally-unique values. Inject a deterministic implementation in tests.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ProductId;
}

impl<G> IdGenerator for std::sync::Arc<G>
where
    G: IdGenerator + ?Sized,
{
    fn next_id(&self) -> ProductId {
        (**self).next_id()
    }
}

/// Random (UUIDv4) identifiers. Random rather than time-ordered so ids carry
/// no creation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> ProductId {
        ProductId(Uuid::new_v4().to_string())
    }
}
