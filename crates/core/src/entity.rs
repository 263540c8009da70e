//! Entity trait: identity + continuity across snapshots.

/// Entity marker + minimal interface.
///
/// Inventory records are fetched fresh from the API on every screen; identity is
/// what lets a caller match a derived result back to the record it came from.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
