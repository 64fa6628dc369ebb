//! The filter value object.
//!
//! A `FilterState` describes every facet the viewer has selected. It is
//! never mutated in place by the UI: each interaction builds a new value
//! (the `with_*` methods consume and return `Self`), and the selector is a
//! pure projection of (entities, filter, reference time).
//!
//! The default value is the identity filter: every facet unset, empty
//! query, matching every entity.

use catalog::{
    Amenity, Atmosphere, CatalogError, Category, CertificationKind, Coordinate, PriceTier, Result,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inclusive price tier range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: PriceTier,
    pub max: PriceTier,
}

impl PriceRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: PriceTier, max: PriceTier) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Range covering exactly one tier
    pub fn single(tier: PriceTier) -> Self {
        Self {
            min: tier,
            max: tier,
        }
    }

    pub fn contains(&self, tier: PriceTier) -> bool {
        self.min <= tier && tier <= self.max
    }

    fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(CatalogError::invalid_facet(
                "price",
                format!("{}..{}", self.min.symbol(), self.max.symbol()),
            ));
        }
        Ok(())
    }
}

impl FromStr for PriceRange {
    type Err = CatalogError;

    /// Example: "2" -> ₩₩ only
    ///          "1-3" or "₩..₩₩₩" -> ₩ through ₩₩₩
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bounds = s.split_once("..").or_else(|| s.split_once('-'));
        match bounds {
            Some((min, max)) => PriceRange::new(min.parse()?, max.parse()?),
            None => Ok(PriceRange::single(s.parse()?)),
        }
    }
}

/// Certification facet values.
///
/// `All` is the identity value; the others require at least one of the
/// entity's certifications to classify as the matching kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationType {
    #[default]
    All,
    Official,
    Peer,
    TasteMatch,
}

impl CertificationType {
    /// The certification kind this value requires, if any
    pub fn kind(self) -> Option<CertificationKind> {
        match self {
            CertificationType::All => None,
            CertificationType::Official => Some(CertificationKind::Official),
            CertificationType::Peer => Some(CertificationKind::Peer),
            CertificationType::TasteMatch => Some(CertificationKind::TasteMatch),
        }
    }
}

impl FromStr for CertificationType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "all" => Ok(CertificationType::All),
            "official" => Ok(CertificationType::Official),
            "peer" => Ok(CertificationType::Peer),
            "taste-match" => Ok(CertificationType::TasteMatch),
            _ => Err(CatalogError::invalid_facet("certification", s)),
        }
    }
}

/// Every facet the viewer can set, plus the free-text query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub category: Option<Category>,
    pub price: Option<PriceRange>,
    pub open_now: bool,
    pub atmosphere: Option<Atmosphere>,
    pub amenity: Option<Amenity>,
    pub certification: CertificationType,
    pub query: String,
    /// Viewer location; when present, results carry a distance
    pub viewer: Option<Coordinate>,
    pub min_rating: Option<f32>,
    /// Radius around the viewer, in meters. Requires `viewer`.
    pub max_distance_m: Option<f64>,
}

impl FilterState {
    /// The identity filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    pub fn with_open_now(mut self, open_now: bool) -> Self {
        self.open_now = open_now;
        self
    }

    pub fn with_atmosphere(mut self, tag: Atmosphere) -> Self {
        self.atmosphere = Some(tag);
        self
    }

    pub fn with_amenity(mut self, tag: Amenity) -> Self {
        self.amenity = Some(tag);
        self
    }

    pub fn with_certification(mut self, certification: CertificationType) -> Self {
        self.certification = certification;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_viewer(mut self, viewer: Coordinate) -> Self {
        self.viewer = Some(viewer);
        self
    }

    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_max_distance(mut self, meters: f64) -> Self {
        self.max_distance_m = Some(meters);
        self
    }

    /// True when no facet restricts results and the query is blank
    pub fn is_identity(&self) -> bool {
        self.category.is_none()
            && self.price.is_none()
            && !self.open_now
            && self.atmosphere.is_none()
            && self.amenity.is_none()
            && self.certification == CertificationType::All
            && self.query.trim().is_empty()
            && self.min_rating.is_none()
            && self.max_distance_m.is_none()
    }

    /// Check every facet value.
    ///
    /// An invalid value here is a caller error and is raised, unlike bad
    /// entity data which only excludes the entity.
    pub fn validate(&self) -> Result<()> {
        if let Some(range) = &self.price {
            range.validate()?;
        }
        if let Some(viewer) = &self.viewer {
            viewer.validate()?;
        }
        if let Some(rating) = self.min_rating {
            if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
                return Err(CatalogError::invalid_facet("min_rating", rating));
            }
        }
        if let Some(meters) = self.max_distance_m {
            if !meters.is_finite() || meters < 0.0 {
                return Err(CatalogError::invalid_facet("max_distance", meters));
            }
            if self.viewer.is_none() {
                return Err(CatalogError::invalid_facet(
                    "max_distance",
                    "radius set without a viewer location",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let filter = FilterState::new();
        assert!(filter.is_identity());
        assert!(filter.validate().is_ok());

        // A viewer location alone does not restrict anything
        let filter = FilterState::new().with_viewer(Coordinate::new(37.5, 127.0)).with_query("   ");
        assert!(filter.is_identity());
    }

    #[test]
    fn test_with_methods_replace_values() {
        let before = FilterState::new().with_category(Category::Cafe);
        let after = before.clone().with_category(Category::Bar).with_open_now(true);

        assert_eq!(before.category, Some(Category::Cafe));
        assert!(!before.open_now);
        assert_eq!(after.category, Some(Category::Bar));
        assert!(after.open_now);
    }

    #[test]
    fn test_price_range_parsing() {
        let range: PriceRange = "1-3".parse().unwrap();
        assert!(range.contains(PriceTier::Budget));
        assert!(range.contains(PriceTier::Expensive));
        assert!(!range.contains(PriceTier::Luxury));

        let range: PriceRange = "₩₩..₩₩₩₩".parse().unwrap();
        assert_eq!(range.min, PriceTier::Moderate);
        assert_eq!(range.max, PriceTier::Luxury);

        let single: PriceRange = "₩".parse().unwrap();
        assert_eq!(single, PriceRange::single(PriceTier::Budget));

        assert!("4-1".parse::<PriceRange>().is_err());
        assert!("1-9".parse::<PriceRange>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_facets() {
        let inverted = FilterState {
            price: Some(PriceRange {
                min: PriceTier::Luxury,
                max: PriceTier::Budget,
            }),
            ..FilterState::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(CatalogError::InvalidFacetValue { .. })
        ));

        let bad_viewer = FilterState::new().with_viewer(Coordinate::new(100.0, 0.0));
        assert!(matches!(
            bad_viewer.validate(),
            Err(CatalogError::InvalidCoordinate { .. })
        ));

        assert!(FilterState::new().with_min_rating(6.0).validate().is_err());
        assert!(FilterState::new().with_max_distance(500.0).validate().is_err());
        assert!(
            FilterState::new()
                .with_viewer(Coordinate::new(37.5, 127.0))
                .with_max_distance(-1.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_certification_type_parsing() {
        assert_eq!("taste_match".parse::<CertificationType>().unwrap(), CertificationType::TasteMatch);
        assert_eq!("ALL".parse::<CertificationType>().unwrap(), CertificationType::All);
        assert!("gold".parse::<CertificationType>().is_err());
        assert_eq!(CertificationType::All.kind(), None);
        assert_eq!(CertificationType::Peer.kind(), Some(CertificationKind::Peer));
    }

    #[test]
    fn test_filter_state_deserializes_with_defaults() {
        let filter: FilterState =
            serde_json::from_str(r#"{ "category": "cafe", "open_now": true }"#).unwrap();
        assert_eq!(filter.category, Some(Category::Cafe));
        assert!(filter.open_now);
        assert_eq!(filter.certification, CertificationType::All);
        assert!(filter.query.is_empty());
    }
}
