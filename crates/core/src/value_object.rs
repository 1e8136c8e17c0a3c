//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attributes. The
/// priced fields of an order are a value object: two orders with equal priced
/// fields always carry the same price.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ShiftWindow { start: ShiftTime, end: ShiftTime }
///
/// impl ValueObject for ShiftWindow {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
