//! Entity traits: identity + partition scope.

/// Entity marker + minimal interface.
///
/// The identifier is stable across the entity's whole lifetime: the same value
/// is reported for the row that was inserted, every later update, and the row
/// that was finally deleted.
pub trait Entity {
    /// Returns the entity identifier.
    fn id(&self) -> &str;
}

/// Entities that live inside a namespace (tenant/partition scope).
///
/// Cluster-global objects (ACL tokens and policies, auth methods, nodes) do not
/// implement this trait.
pub trait Namespaced: Entity {
    fn namespace(&self) -> &str;
}
