//! Facet implementations.
//!
//! Each facet is one independent predicate; `FacetSet` composes them.

pub mod category;
pub mod certification;
pub mod distance;
pub mod open_now;
pub mod price;
pub mod rating;
pub mod tags;

// Re-export for convenience
pub use category::CategoryFacet;
pub use certification::CertificationFacet;
pub use distance::DistanceFacet;
pub use open_now::OpenNowFacet;
pub use price::PriceFacet;
pub use rating::MinRatingFacet;
pub use tags::{AmenityFacet, AtmosphereFacet};
