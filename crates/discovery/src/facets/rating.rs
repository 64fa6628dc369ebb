//! Minimum-rating facet.

use crate::traits::Facet;
use catalog::Entity;

pub struct MinRatingFacet(pub f32);

impl Facet for MinRatingFacet {
    fn name(&self) -> &str {
        "min_rating"
    }

    fn matches(&self, entity: &Entity) -> bool {
        entity.rating >= self.0
    }
}
