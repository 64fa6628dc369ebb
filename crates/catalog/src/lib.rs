//! # Catalog Crate
//!
//! Domain types and data handling for restaurant discovery.
//!
//! ## Main Components
//!
//! - **types**: Entities, coordinates, price tiers, tags, engagement snapshots
//! - **error**: The discovery error taxonomy and loading errors
//! - **geo**: Haversine distance
//! - **hours**: Operating-hours parsing and open-at evaluation
//! - **parser**: Facet value parsing and JSON reading
//! - **index**: The `Catalog` collection and file loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Coordinate, geo};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/seoul.json"))?;
//! let viewer = Coordinate::validated(37.5665, 126.9780)?;
//!
//! for entity in catalog.entities() {
//!     let meters = geo::distance(viewer, entity.location)?;
//!     println!("{} is {:.0} m away", entity.name, meters);
//! }
//! ```

// Public modules
pub mod error;
pub mod geo;
pub mod hours;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::{Catalog, load_snapshots};
pub use types::{
    // Type aliases
    EntityId,
    // Core types
    Coordinate,
    EngagementSnapshot,
    Entity,
    OperatingHours,
    Shift,
    // Enums
    Amenity,
    Atmosphere,
    Category,
    CertificationKind,
    EntityKind,
    PriceTier,
    // Classification
    classify_certification,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_classify_certification() {
        assert_eq!(classify_certification("michelin-star"), Some(CertificationKind::Official));
        assert_eq!(classify_certification("chef-pick"), Some(CertificationKind::Peer));
        assert_eq!(classify_certification("taste-match"), Some(CertificationKind::TasteMatch));
        assert_eq!(classify_certification("made-up-award"), None);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::validated(37.5, 127.0).is_ok());
        assert!(Coordinate::validated(-90.0, 180.0).is_ok());
        assert!(matches!(
            Coordinate::validated(0.0, 200.0),
            Err(CatalogError::InvalidCoordinate { .. })
        ));
    }
}
