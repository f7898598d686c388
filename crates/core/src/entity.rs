//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if the store has assigned one yet.
    ///
    /// Records built in memory (e.g. from a form submission) have no identity
    /// until they are first persisted.
    fn id(&self) -> Option<&Self::Id>;

    /// Two entities are the same entity when both carry the same identifier.
    fn same_entity(&self, other: &Self) -> bool {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}
