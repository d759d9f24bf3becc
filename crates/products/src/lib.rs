//! Products domain module.
//!
//! This crate contains the product record and its rating history, implemented
//! purely as deterministic transforms (no IO, no HTTP, no storage). Every
//! mutation builds a new `Product` from the old one; persisting the result is
//! the caller's job.

pub mod product;
pub mod rating;

pub use product::{NewProduct, Product, ProductChanges};
pub use rating::{Rating, average_rating};
