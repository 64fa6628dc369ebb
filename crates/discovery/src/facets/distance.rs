//! Radius facet around the viewer location.

use crate::traits::Facet;
use catalog::{Coordinate, Entity, geo};
use tracing::debug;

/// Keeps entities within `max_meters` of the viewer.
///
/// Entities with an out-of-range coordinate are excluded.
pub struct DistanceFacet {
    viewer: Coordinate,
    max_meters: f64,
}

impl DistanceFacet {
    /// `viewer` must already be validated
    pub fn new(viewer: Coordinate, max_meters: f64) -> Self {
        Self { viewer, max_meters }
    }
}

impl Facet for DistanceFacet {
    fn name(&self) -> &str {
        "max_distance"
    }

    fn matches(&self, entity: &Entity) -> bool {
        match geo::distance(self.viewer, entity.location) {
            Ok(meters) => meters <= self.max_meters,
            Err(e) => {
                debug!("Excluding entity {} from radius search: {}", entity.id, e);
                false
            }
        }
    }
}
