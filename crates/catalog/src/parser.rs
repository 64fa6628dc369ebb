//! Parsing of facet values and catalog files.
//!
//! Facet values arrive as strings from callers (query strings, CLI flags)
//! and from data files. Every parser here rejects unknown values with
//! `CatalogError::InvalidFacetValue`, naming the facet it was parsing.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Read a JSON document from `path` into `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

/// Canonical form for matching enum names: trimmed, lowercase, `_`/space as `-`
fn canonical(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts the kebab-case name, the English label or the Korean label
    ///
    /// Example: "fast-food", "Fast Food" and "패스트푸드" all parse to
    /// `Category::FastFood`
    fn from_str(s: &str) -> Result<Self> {
        let wanted = canonical(s);
        Category::ALL
            .into_iter()
            .find(|category| {
                canonical(category.label()) == wanted || category.local_label() == s.trim()
            })
            .ok_or_else(|| CatalogError::invalid_facet("category", s))
    }
}

impl FromStr for PriceTier {
    type Err = CatalogError;

    /// Example: "2" -> Ok(PriceTier::Moderate)
    ///          "₩₩₩" -> Ok(PriceTier::Expensive)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(ordinal) = s.parse::<u8>() {
            return PriceTier::try_from(ordinal);
        }
        let count = s.chars().count();
        if count > 0 && s.chars().all(|c| c == '₩') {
            return u8::try_from(count)
                .map_err(|_| CatalogError::invalid_facet("price", s))
                .and_then(PriceTier::try_from);
        }
        Err(CatalogError::invalid_facet("price", s))
    }
}

impl TryFrom<u8> for PriceTier {
    type Error = CatalogError;

    fn try_from(ordinal: u8) -> Result<Self> {
        match ordinal {
            1 => Ok(PriceTier::Budget),
            2 => Ok(PriceTier::Moderate),
            3 => Ok(PriceTier::Expensive),
            4 => Ok(PriceTier::Luxury),
            _ => Err(CatalogError::invalid_facet("price", ordinal)),
        }
    }
}

impl TryFrom<RawPriceTier> for PriceTier {
    type Error = CatalogError;

    fn try_from(raw: RawPriceTier) -> Result<Self> {
        match raw {
            RawPriceTier::Ordinal(ordinal) => PriceTier::try_from(ordinal),
            RawPriceTier::Symbol(symbol) => symbol.parse(),
        }
    }
}

impl FromStr for Atmosphere {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match canonical(s).as_str() {
            "cozy" => Ok(Atmosphere::Cozy),
            "romantic" => Ok(Atmosphere::Romantic),
            "lively" => Ok(Atmosphere::Lively),
            "quiet" => Ok(Atmosphere::Quiet),
            "family-friendly" => Ok(Atmosphere::FamilyFriendly),
            "trendy" => Ok(Atmosphere::Trendy),
            "traditional" => Ok(Atmosphere::Traditional),
            "scenic" => Ok(Atmosphere::Scenic),
            _ => Err(CatalogError::invalid_facet("atmosphere", s)),
        }
    }
}

impl FromStr for Amenity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match canonical(s).as_str() {
            "parking" => Ok(Amenity::Parking),
            "wifi" => Ok(Amenity::Wifi),
            "reservation" => Ok(Amenity::Reservation),
            "delivery" => Ok(Amenity::Delivery),
            "takeout" => Ok(Amenity::Takeout),
            "pet-friendly" => Ok(Amenity::PetFriendly),
            "outdoor-seating" => Ok(Amenity::OutdoorSeating),
            "private-room" => Ok(Amenity::PrivateRoom),
            "accessible" => Ok(Amenity::Accessible),
            _ => Err(CatalogError::invalid_facet("amenity", s)),
        }
    }
}
