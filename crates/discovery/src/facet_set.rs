//! The FacetSet composes facets with logical AND.
//!
//! A `FacetSet` is compiled once from a `FilterState` (validating it) and
//! then evaluated against any number of entities. Only facets the viewer
//! actually set are installed, so an unset facet is the identity.

use crate::facets::*;
use crate::filter_state::FilterState;
use crate::traits::Facet;
use catalog::{Entity, Result};
use chrono::NaiveTime;
use tracing::debug;

/// Chains facets together; an entity must pass every one.
///
/// ## Usage
/// ```ignore
/// let facets = FacetSet::new()
///     .add_facet(CategoryFacet(Category::Korean))
///     .add_facet(OpenNowFacet::new(now));
///
/// let keep = facets.matches(&entity);
/// ```
pub struct FacetSet {
    facets: Vec<Box<dyn Facet>>,
}

impl FacetSet {
    /// Create a new empty FacetSet (matches everything)
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Add a facet to the set (builder pattern)
    pub fn add_facet(mut self, facet: impl Facet + 'static) -> Self {
        self.facets.push(Box::new(facet));
        self
    }

    /// Compile a filter into a facet set.
    ///
    /// ## Algorithm
    /// 1. Validate the filter (invalid values are raised here)
    /// 2. Install one facet per set field, in a fixed order:
    ///    category, price, open-now, atmosphere, amenity, certification,
    ///    min-rating, max-distance
    ///
    /// # Arguments
    /// * `filter` - The viewer's current filter
    /// * `at` - Reference time for the open-now facet
    pub fn from_filter(filter: &FilterState, at: NaiveTime) -> Result<Self> {
        filter.validate()?;

        let mut set = Self::new();
        if let Some(category) = filter.category {
            set = set.add_facet(CategoryFacet(category));
        }
        if let Some(range) = filter.price {
            set = set.add_facet(PriceFacet(range));
        }
        if filter.open_now {
            set = set.add_facet(OpenNowFacet::new(at));
        }
        if let Some(tag) = filter.atmosphere {
            set = set.add_facet(AtmosphereFacet(tag));
        }
        if let Some(tag) = filter.amenity {
            set = set.add_facet(AmenityFacet(tag));
        }
        if let Some(kind) = filter.certification.kind() {
            set = set.add_facet(CertificationFacet(kind));
        }
        if let Some(rating) = filter.min_rating {
            set = set.add_facet(MinRatingFacet(rating));
        }
        if let (Some(viewer), Some(meters)) = (filter.viewer, filter.max_distance_m) {
            set = set.add_facet(DistanceFacet::new(viewer, meters));
        }

        debug!("Compiled filter into facets: [{}]", set.names().join(", "));
        Ok(set)
    }

    /// Whether the entity passes every installed facet
    pub fn matches(&self, entity: &Entity) -> bool {
        self.facets.iter().all(|facet| facet.matches(entity))
    }

    /// Names of the installed facets, in evaluation order
    pub fn names(&self) -> Vec<&str> {
        self.facets.iter().map(|facet| facet.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}

impl Default for FacetSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate one entity against a filter.
///
/// Convenience wrapper over [`FacetSet::from_filter`]; when testing many
/// entities against the same filter, compile a `FacetSet` once instead.
pub fn matches(entity: &Entity, filter: &FilterState, at: NaiveTime) -> Result<bool> {
    Ok(FacetSet::from_filter(filter, at)?.matches(entity))
}
