//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products are entities: two products with the same reference are the same
/// product, whatever their sales figures say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
