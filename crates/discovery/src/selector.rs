//! The result selector: facets AND search over a collection.
//!
//! `select` validates the filter and compiles it once, then hands back a
//! lazy `Selection`. Each call to `Selection::iter` restarts from the first
//! entity, and iteration never reorders: survivors come out in input order.
//! Ordering by distance or rating is a separate step (see [`crate::sort`]).

use crate::facet_set::FacetSet;
use crate::filter_state::FilterState;
use crate::search::SearchMatcher;
use catalog::{Coordinate, Entity, Result, geo};
use chrono::NaiveTime;
use tracing::{debug, instrument};

/// One entity that passed the filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selected<'a> {
    pub entity: &'a Entity,
    /// Meters from the viewer; `None` without a viewer or when the entity's
    /// own coordinate is unusable
    pub distance_m: Option<f64>,
}

/// A compiled, restartable view over the entities matching a filter
pub struct Selection<'a> {
    entities: &'a [Entity],
    facets: FacetSet,
    search: SearchMatcher,
    viewer: Option<Coordinate>,
}

impl<'a> Selection<'a> {
    /// Iterate matching entities in input order.
    ///
    /// Calling this again starts a fresh pass; no state is kept between passes.
    pub fn iter(&self) -> impl Iterator<Item = Selected<'a>> + '_ {
        let entities: &'a [Entity] = self.entities;
        entities
            .iter()
            .filter(move |entity| self.includes(entity))
            .map(move |entity| Selected {
                entity,
                distance_m: self.distance_to(entity),
            })
    }

    /// Whether a single entity belongs to the selection
    pub fn includes(&self, entity: &Entity) -> bool {
        self.facets.matches(entity) && self.search.matches(entity)
    }

    /// Number of matching entities (runs a full pass)
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Materialize one pass into a Vec
    pub fn to_vec(&self) -> Vec<Selected<'a>> {
        self.iter().collect()
    }

    /// The viewer location carried by the filter, if any
    pub fn viewer(&self) -> Option<Coordinate> {
        self.viewer
    }

    fn distance_to(&self, entity: &Entity) -> Option<f64> {
        let viewer = self.viewer?;
        geo::distance(viewer, entity.location).ok()
    }
}

/// Select the entities matching `filter` at reference time `at`.
///
/// # Arguments
/// * `entities` - The collection, in the order results should keep
/// * `filter` - The viewer's filter; invalid values are raised here
/// * `at` - Reference time for the open-now facet
///
/// # Returns
/// * `Ok(Selection)` - A lazy, restartable view over the matches
/// * `Err` - If a facet value is invalid
#[instrument(skip_all, fields(entities = entities.len()))]
pub fn select<'a>(
    entities: &'a [Entity],
    filter: &FilterState,
    at: NaiveTime,
) -> Result<Selection<'a>> {
    let facets = FacetSet::from_filter(filter, at)?;
    let search = SearchMatcher::new(&filter.query);
    debug!(
        "Selecting with {} facets (search: {})",
        facets.len(),
        if search.is_match_all() { "none" } else { "active" }
    );
    Ok(Selection {
        entities,
        facets,
        search,
        viewer: filter.viewer,
    })
}

impl<'s, 'a> IntoIterator for &'s Selection<'a> {
    type Item = Selected<'a>;
    type IntoIter = Box<dyn Iterator<Item = Selected<'a>> + 's>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
