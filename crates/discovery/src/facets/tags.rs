//! Atmosphere and amenity facets: set membership on the entity's tags.

use crate::traits::Facet;
use catalog::{Amenity, Atmosphere, Entity};

pub struct AtmosphereFacet(pub Atmosphere);

impl Facet for AtmosphereFacet {
    fn name(&self) -> &str {
        "atmosphere"
    }

    fn matches(&self, entity: &Entity) -> bool {
        entity.atmosphere.contains(&self.0)
    }
}

pub struct AmenityFacet(pub Amenity);

impl Facet for AmenityFacet {
    fn name(&self) -> &str {
        "amenity"
    }

    fn matches(&self, entity: &Entity) -> bool {
        entity.amenities.contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::fixtures::restaurant;

    #[test]
    fn test_atmosphere_facet() {
        let facet = AtmosphereFacet(Atmosphere::Romantic);
        let date_spot = restaurant(1, "Dining in Space")
            .with_atmosphere(Atmosphere::Romantic)
            .with_atmosphere(Atmosphere::Scenic);
        let pub_spot = restaurant(2, "Craftroot").with_atmosphere(Atmosphere::Lively);

        assert!(facet.matches(&date_spot));
        assert!(!facet.matches(&pub_spot));
        assert!(!facet.matches(&restaurant(3, "Untagged")));
    }

    #[test]
    fn test_amenity_facet() {
        let facet = AmenityFacet(Amenity::Parking);
        let with_parking = restaurant(1, "Byeokje Galbi")
            .with_amenity(Amenity::Parking)
            .with_amenity(Amenity::PrivateRoom);

        assert!(facet.matches(&with_parking));
        assert!(!facet.matches(&restaurant(2, "Alley Stall")));
    }
}
