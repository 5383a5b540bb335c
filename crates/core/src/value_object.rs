//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// instances with the same values are the same value. `Location` metadata is
/// the canonical example here: a resolved location is a snapshot of ceilings,
/// not an entity with a lifecycle.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
