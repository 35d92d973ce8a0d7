//! Entity Trait
//!
//! Anything the board looks up by identifier.

/// An item with a stable identifier
pub trait Entity: Clone {
    /// Identifier type
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's identifier
    fn id(&self) -> Self::Id;
}

/// Index of the entity with `id` in `list`, if present
pub(crate) fn position_of<E: Entity>(list: &[E], id: E::Id) -> Option<usize> {
    list.iter().position(|entity| entity.id() == id)
}
