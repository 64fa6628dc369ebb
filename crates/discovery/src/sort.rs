//! Explicit ordering of selected results.
//!
//! The selector preserves input order; callers that want "nearest first" or
//! "best rated first" apply one of these sorts afterwards. Every order is
//! total: ties fall back to the entity id.

use crate::selector::Selected;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use catalog::CatalogError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the selector's (input) order
    #[default]
    Input,
    /// Nearest first; results without a distance go last
    Distance,
    /// Highest rating first
    Rating,
    /// Alphabetical by name
    Name,
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "input" | "none" => Ok(SortOrder::Input),
            "distance" => Ok(SortOrder::Distance),
            "rating" => Ok(SortOrder::Rating),
            "name" => Ok(SortOrder::Name),
            _ => Err(CatalogError::invalid_facet("sort", s)),
        }
    }
}

/// Sort results in place
pub fn sort_results(results: &mut [Selected<'_>], order: SortOrder) {
    match order {
        SortOrder::Input => {}
        SortOrder::Distance => results.sort_by(|a, b| {
            compare_distance(a.distance_m, b.distance_m).then(a.entity.id.cmp(&b.entity.id))
        }),
        SortOrder::Rating => results.sort_by(|a, b| {
            b.entity
                .rating
                .partial_cmp(&a.entity.rating)
                .unwrap_or(Ordering::Equal)
                .then(a.entity.id.cmp(&b.entity.id))
        }),
        SortOrder::Name => results.sort_by(|a, b| {
            a.entity
                .name
                .to_lowercase()
                .cmp(&b.entity.name.to_lowercase())
                .then(a.entity.id.cmp(&b.entity.id))
        }),
    }
}

/// Known distances ascending, unknown distances after all known ones
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
