//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// monthly sales series is one: two series with the same twelve figures are
/// interchangeable, whichever product they came from.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(12.0), Price(12.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
