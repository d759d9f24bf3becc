//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// A `Rating` of 4 is interchangeable with any other `Rating` of 4, while two
/// products with identical fields but different ids are still distinct.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Rating(u8);
///
/// impl ValueObject for Rating {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
