//! Certification facet.
//!
//! Each certification id on the entity is classified through the fixed
//! table in `catalog::classify_certification`. Unknown ids never match.

use crate::traits::Facet;
use catalog::{CertificationKind, Entity, classify_certification};

/// Keeps entities holding at least one certification of the given kind.
///
/// Only built for a concrete kind; the `All` filter value installs no
/// facet, which is why an entity without certifications matches only `All`.
pub struct CertificationFacet(pub CertificationKind);

impl Facet for CertificationFacet {
    fn name(&self) -> &str {
        "certification"
    }

    fn matches(&self, entity: &Entity) -> bool {
        entity
            .certifications
            .iter()
            .any(|id| classify_certification(id) == Some(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::fixtures::restaurant;

    #[test]
    fn test_certification_facet() {
        let starred = restaurant(1, "Jungsik").with_certification("michelin-star");
        let peer = restaurant(2, "Hadongkwan").with_certification("chef-pick");
        let unknown = restaurant(3, "Self Awarded").with_certification("best-in-town");
        let none = restaurant(4, "Plain");

        let official = CertificationFacet(CertificationKind::Official);
        assert!(official.matches(&starred));
        assert!(!official.matches(&peer));
        assert!(!official.matches(&unknown));
        assert!(!official.matches(&none));

        let peer_facet = CertificationFacet(CertificationKind::Peer);
        assert!(peer_facet.matches(&peer));
        assert!(!peer_facet.matches(&starred));
    }

    #[test]
    fn test_mixed_certifications() {
        let mixed = restaurant(1, "Mixed")
            .with_certification("best-in-town")
            .with_certification("taste-twin");
        assert!(CertificationFacet(CertificationKind::TasteMatch).matches(&mixed));
    }
}
