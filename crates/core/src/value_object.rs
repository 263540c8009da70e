//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; two with the same attributes are equal.
//! Apogee windows and aggregation buckets are value objects: they are computed
//! fresh per call and never mutated afterwards.

/// Marker trait for value objects.
///
/// Requires `Clone + PartialEq + Debug` so values can be copied into results,
/// compared in tests, and logged.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct DateWindow { start: Option<NaiveDate>, end: Option<NaiveDate> }
///
/// impl ValueObject for DateWindow {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
