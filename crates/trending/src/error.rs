//! Error types for the trending crate.

use catalog::{CatalogError, EntityId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendingError {
    /// Weights are negative, not finite, or break the recency/volume ordering
    #[error("Invalid trending weights: {0}")]
    InvalidWeights(String),

    /// The same entity appears twice in one batch of snapshots
    #[error("Entity {0} appears more than once in one snapshot batch")]
    DuplicateEntity(EntityId),

    /// A ranking was appended to the log with a timestamp not after the latest one
    #[error("Ranking at {timestamp} is not after the latest ranking at {latest}")]
    OutOfOrderSnapshot { timestamp: i64, latest: i64 },

    /// Loading a weights or snapshot file failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, TrendingError>;
