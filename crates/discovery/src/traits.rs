//! Core trait for facet evaluation.
//!
//! A facet is one independent filter dimension (category, price, ...).
//! Facets are composed by a `FacetSet`, which ANDs them together.

use catalog::Entity;

/// A single facet predicate.
///
/// ## Design Note
/// - `Send + Sync` allows a compiled filter to be shared across threads
/// - `matches` is infallible: filter values are validated before a facet is
///   built, and bad entity data simply fails the predicate
pub trait Facet: Send + Sync {
    /// Returns the name of this facet (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether the entity passes this facet
    fn matches(&self, entity: &Entity) -> bool;
}
