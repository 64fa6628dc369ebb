//! Error types for the catalog crate.
//!
//! Three of the variants form the discovery error taxonomy shared by every
//! crate in the workspace:
//! - `InvalidCoordinate` for out-of-range latitude/longitude
//! - `InvalidFacetValue` for a filter facet outside its declared range
//! - `MalformedOperatingHours` for hours that cannot be parsed or compared
//!
//! The remaining variants cover loading and validating catalog files.

use thiserror::Error;

use crate::types::EntityId;

/// Errors that can occur while loading entities or evaluating discovery queries
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Latitude or longitude outside its valid range (or not finite)
    #[error("Invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// A filter facet holds a value outside its declared enum or range
    ///
    /// This is a caller error at the boundary, never a data-quality issue.
    #[error("Invalid value for facet {facet}: {value}")]
    InvalidFacetValue { facet: String, value: String },

    /// Operating hours that cannot be parsed or compared
    #[error("Malformed operating hours: {value}")]
    MalformedOperatingHours { value: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents were not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entity field had an invalid value
    #[error("Invalid value for {field} on entity {id}: {value}")]
    InvalidValue {
        id: EntityId,
        field: String,
        value: String,
    },

    /// Two entities share the same identifier
    #[error("Duplicate entity id: {0}")]
    DuplicateId(EntityId),
}

impl CatalogError {
    /// Shorthand for building an `InvalidFacetValue` error
    pub fn invalid_facet(facet: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidFacetValue {
            facet: facet.into(),
            value: value.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
