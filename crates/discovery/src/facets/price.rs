//! Price facet: the entity's tier must fall inside an inclusive range.

use crate::filter_state::PriceRange;
use crate::traits::Facet;
use catalog::Entity;

pub struct PriceFacet(pub PriceRange);

impl Facet for PriceFacet {
    fn name(&self) -> &str {
        "price"
    }

    fn matches(&self, entity: &Entity) -> bool {
        self.0.contains(entity.price)
    }
}
