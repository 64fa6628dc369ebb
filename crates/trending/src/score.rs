//! Trending score aggregation.
//!
//! score = w_v * views + w_l * likes + w_s * shares + w_r * recent_reviews
//!
//! Windowing of "recent" reviews is done by whoever captures the snapshot;
//! the score itself is a pure function of the counters and the weights.

use crate::error::Result;
use crate::weights::TrendingWeights;
use catalog::EngagementSnapshot;

/// Weighted sum of one snapshot's counters
pub fn score(snapshot: &EngagementSnapshot, weights: &TrendingWeights) -> f64 {
    weights.views * snapshot.views as f64
        + weights.likes * snapshot.likes as f64
        + weights.shares * snapshot.shares as f64
        + weights.recent_reviews * snapshot.recent_reviews as f64
}

/// Scores and ranks engagement snapshots with a fixed set of weights.
///
/// ## Usage
/// ```ignore
/// let scorer = TrendingScorer::new(TrendingWeights::default().with_shares(2.0))?;
/// let ranking = scorer.rank(&snapshots)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrendingScorer {
    pub(crate) weights: TrendingWeights,
}

impl TrendingScorer {
    /// Create a scorer, validating the weights
    pub fn new(weights: TrendingWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &TrendingWeights {
        &self.weights
    }

    pub fn score(&self, snapshot: &EngagementSnapshot) -> f64 {
        score(snapshot, &self.weights)
    }
}
