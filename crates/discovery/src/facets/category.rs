//! Category facet: exact match on the entity's single category.

use crate::traits::Facet;
use catalog::{Category, Entity};

pub struct CategoryFacet(pub Category);

impl Facet for CategoryFacet {
    fn name(&self) -> &str {
        "category"
    }

    fn matches(&self, entity: &Entity) -> bool {
        entity.category == self.0
    }
}
