//! `catalog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, product identifiers, and the injectable capabilities
//! (id generation, clock) the service layer depends on.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use clock::{Clock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{IdGenerator, ProductId, UuidIdGenerator};
pub use value_object::ValueObject;
