//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A product keeps its identity while its fields and rating history change;
/// two records with the same id describe the same product.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
