//! Core domain types for restaurant discovery.
//!
//! This module defines the data model shared by every crate in the workspace:
//! - Entities (restaurants and curated lists) and their facets
//! - Coordinates and operating hours
//! - Engagement snapshots consumed by the trending crate

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a restaurant or list
pub type EntityId = u32;

// =============================================================================
// Entity-related Types
// =============================================================================

/// Whether an entity is a single restaurant or a curated list of restaurants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    #[default]
    Restaurant,
    List,
}

/// Cuisine category. Every entity has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Korean,
    Japanese,
    Chinese,
    Western,
    Asian,
    Cafe,
    Bakery,
    Bar,
    Dessert,
    FastFood,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 10] = [
        Category::Korean,
        Category::Japanese,
        Category::Chinese,
        Category::Western,
        Category::Asian,
        Category::Cafe,
        Category::Bakery,
        Category::Bar,
        Category::Dessert,
        Category::FastFood,
    ];

    /// English display label
    pub fn label(self) -> &'static str {
        match self {
            Category::Korean => "Korean",
            Category::Japanese => "Japanese",
            Category::Chinese => "Chinese",
            Category::Western => "Western",
            Category::Asian => "Asian",
            Category::Cafe => "Cafe",
            Category::Bakery => "Bakery",
            Category::Bar => "Bar",
            Category::Dessert => "Dessert",
            Category::FastFood => "Fast Food",
        }
    }

    /// Korean display label
    pub fn local_label(self) -> &'static str {
        match self {
            Category::Korean => "한식",
            Category::Japanese => "일식",
            Category::Chinese => "중식",
            Category::Western => "양식",
            Category::Asian => "아시안",
            Category::Cafe => "카페",
            Category::Bakery => "베이커리",
            Category::Bar => "술집",
            Category::Dessert => "디저트",
            Category::FastFood => "패스트푸드",
        }
    }
}

/// Price tier, an ordinal from 1 (₩) to 4 (₩₩₩₩)
///
/// Deserializes from either the ordinal (`2`) or the symbol (`"₩₩"`),
/// and always serializes as the ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPriceTier", into = "u8")]
pub enum PriceTier {
    Budget = 1,
    Moderate = 2,
    Expensive = 3,
    Luxury = 4,
}

impl PriceTier {
    /// Ordinal value, 1 through 4
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Symbolic form, one won sign per tier
    pub fn symbol(self) -> String {
        "₩".repeat(self.ordinal() as usize)
    }
}

impl From<PriceTier> for u8 {
    fn from(tier: PriceTier) -> Self {
        tier.ordinal()
    }
}

/// Wire form accepted for price tiers
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPriceTier {
    Ordinal(u8),
    Symbol(String),
}

/// Ambience tags an entity can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Atmosphere {
    Cozy,
    Romantic,
    Lively,
    Quiet,
    FamilyFriendly,
    Trendy,
    Traditional,
    Scenic,
}

/// Facilities an entity offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Amenity {
    Parking,
    Wifi,
    Reservation,
    Delivery,
    Takeout,
    PetFriendly,
    OutdoorSeating,
    PrivateRoom,
    Accessible,
}

/// Classification of a certification identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationKind {
    /// Issued by a guide or public body
    Official,
    /// Endorsed by other restaurateurs or regulars
    Peer,
    /// Matched to the viewer's taste profile
    TasteMatch,
}

/// Fixed classification table for certification identifiers
const CERTIFICATIONS: &[(&str, CertificationKind)] = &[
    ("michelin-star", CertificationKind::Official),
    ("michelin-bib", CertificationKind::Official),
    ("blue-ribbon", CertificationKind::Official),
    ("hygiene-grade-a", CertificationKind::Official),
    ("chef-pick", CertificationKind::Peer),
    ("owner-pick", CertificationKind::Peer),
    ("regulars-favorite", CertificationKind::Peer),
    ("taste-match", CertificationKind::TasteMatch),
    ("taste-twin", CertificationKind::TasteMatch),
];

/// Look up a certification identifier in the classification table.
///
/// Returns `None` for unknown identifiers.
pub fn classify_certification(id: &str) -> Option<CertificationKind> {
    CERTIFICATIONS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|&(_, kind)| kind)
}

// =============================================================================
// Location and Hours
// =============================================================================

/// A geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate without validating it.
    ///
    /// Entity data may hold bad coordinates; use [`Coordinate::validated`]
    /// when the value comes from a caller.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a coordinate, rejecting out-of-range values
    pub fn validated(lat: f64, lng: f64) -> crate::Result<Self> {
        let coord = Self::new(lat, lng);
        coord.validate()?;
        Ok(coord)
    }

    /// True when latitude is within -90..=90 and longitude within -180..=180
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(crate::CatalogError::InvalidCoordinate {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }
}

/// One opening window, e.g. "11:30" to "15:00"
///
/// Times are kept as the raw "HH:MM" strings supplied by the data source;
/// they are parsed when evaluated (see [`crate::hours`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub open: String,
    pub close: String,
}

impl Shift {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Operating hours: one or more shifts (split shifts for a lunch break)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatingHours {
    pub shifts: Vec<Shift>,
}

impl OperatingHours {
    /// Hours with a single shift
    pub fn single(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            shifts: vec![Shift::new(open, close)],
        }
    }

    /// Add another shift (builder pattern)
    pub fn with_shift(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.shifts.push(Shift::new(open, close));
        self
    }
}

// =============================================================================
// Entity
// =============================================================================

/// A restaurant or list as supplied by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    #[serde(default)]
    pub kind: EntityKind,
    pub name: String,
    pub category: Category,
    pub price: PriceTier,
    /// Average rating from 0.0 to 5.0
    pub rating: f32,
    pub location: Coordinate,
    #[serde(default)]
    pub hours: OperatingHours,
    #[serde(default)]
    pub atmosphere: BTreeSet<Atmosphere>,
    #[serde(default)]
    pub amenities: BTreeSet<Amenity>,
    /// Certification identifiers, classified via [`classify_certification`]
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl Entity {
    /// Create a restaurant with the required fields and empty optional ones.
    ///
    /// Mostly useful for tests and generated fixtures; the `with_*` methods
    /// fill in the rest.
    pub fn restaurant(
        id: EntityId,
        name: impl Into<String>,
        category: Category,
        price: PriceTier,
        location: Coordinate,
    ) -> Self {
        Self {
            id,
            kind: EntityKind::Restaurant,
            name: name.into(),
            category,
            price,
            rating: 0.0,
            location,
            hours: OperatingHours::default(),
            atmosphere: BTreeSet::new(),
            amenities: BTreeSet::new(),
            certifications: Vec::new(),
            address: String::new(),
            description: String::new(),
        }
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_hours(mut self, hours: OperatingHours) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_atmosphere(mut self, tag: Atmosphere) -> Self {
        self.atmosphere.insert(tag);
        self
    }

    pub fn with_amenity(mut self, tag: Amenity) -> Self {
        self.amenities.insert(tag);
        self
    }

    pub fn with_certification(mut self, id: impl Into<String>) -> Self {
        self.certifications.push(id.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// =============================================================================
// Engagement
// =============================================================================

/// Raw engagement counters for one entity at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementSnapshot {
    pub entity_id: EntityId,
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    /// Reviews within the trailing window (e.g. the last 24 hours)
    pub recent_reviews: u64,
    /// Unix timestamp when the counters were captured
    pub timestamp: i64,
}

impl EngagementSnapshot {
    /// Snapshot with all counters at zero
    pub fn empty(entity_id: EntityId, timestamp: i64) -> Self {
        Self {
            entity_id,
            views: 0,
            likes: 0,
            shares: 0,
            recent_reviews: 0,
            timestamp,
        }
    }
}
