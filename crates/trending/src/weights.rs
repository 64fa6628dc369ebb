//! Trending weights configuration.
//!
//! The weights are tuning knobs, not business rules: defaults are provided,
//! individual weights can be overridden with the `with_*` builder methods,
//! and a full set can be loaded from JSON. Validation enforces the one
//! structural rule: recent reviews (the recency signal) weigh at least as
//! much as any other counter, and raw views (the easily inflated volume
//! signal) weigh no more than any other counter.

use crate::error::{Result, TrendingError};
use catalog::parser::read_json;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingWeights {
    pub views: f64,
    pub likes: f64,
    pub shares: f64,
    pub recent_reviews: f64,
}

impl Default for TrendingWeights {
    fn default() -> Self {
        Self {
            views: 0.1,
            likes: 1.0,
            shares: 3.0,
            recent_reviews: 5.0,
        }
    }
}

impl TrendingWeights {
    /// Configure the weight of raw views (default: 0.1)
    pub fn with_views(mut self, weight: f64) -> Self {
        self.views = weight;
        self
    }

    /// Configure the weight of likes (default: 1.0)
    pub fn with_likes(mut self, weight: f64) -> Self {
        self.likes = weight;
        self
    }

    /// Configure the weight of shares (default: 3.0)
    pub fn with_shares(mut self, weight: f64) -> Self {
        self.shares = weight;
        self
    }

    /// Configure the weight of recent reviews (default: 5.0)
    pub fn with_recent_reviews(mut self, weight: f64) -> Self {
        self.recent_reviews = weight;
        self
    }

    /// Load weights from a JSON file; missing fields keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let weights: TrendingWeights = read_json(path)?;
        weights.validate()?;
        info!("Loaded trending weights from {:?}: {:?}", path, weights);
        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        let all = [
            ("views", self.views),
            ("likes", self.likes),
            ("shares", self.shares),
            ("recent_reviews", self.recent_reviews),
        ];
        for (name, weight) in all {
            if !weight.is_finite() || weight < 0.0 {
                return Err(TrendingError::InvalidWeights(format!(
                    "{name} must be a non-negative number, got {weight}"
                )));
            }
        }
        for (name, weight) in all {
            if weight > self.recent_reviews {
                return Err(TrendingError::InvalidWeights(format!(
                    "{name} ({weight}) outweighs recent_reviews ({})",
                    self.recent_reviews
                )));
            }
            if weight < self.views {
                return Err(TrendingError::InvalidWeights(format!(
                    "views ({}) outweighs {name} ({weight})",
                    self.views
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights_are_valid() {
        let weights = TrendingWeights::default();
        assert!(weights.validate().is_ok());
        assert!(weights.recent_reviews > weights.shares);
        assert!(weights.views < weights.likes);
    }

    #[test]
    fn test_builder_overrides() {
        let weights = TrendingWeights::default().with_likes(2.0).with_recent_reviews(8.0);
        assert_eq!(weights.likes, 2.0);
        assert_eq!(weights.recent_reviews, 8.0);
        assert_eq!(weights.views, 0.1);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_invalid_weights() {
        let negative = TrendingWeights::default().with_likes(-1.0);
        assert!(matches!(negative.validate(), Err(TrendingError::InvalidWeights(_))));

        let views_heaviest = TrendingWeights::default().with_views(10.0);
        assert!(views_heaviest.validate().is_err());

        let shares_over_reviews = TrendingWeights::default().with_shares(6.0);
        assert!(shares_over_reviews.validate().is_err());

        let nan = TrendingWeights::default().with_shares(f64::NAN);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_load_from_file_keeps_defaults_for_missing_fields() {
        let path = std::env::temp_dir().join(format!("weights-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(br#"{ "recent_reviews": 10.0, "shares": 4.0 }"#).unwrap();

        let weights = TrendingWeights::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(weights.recent_reviews, 10.0);
        assert_eq!(weights.shares, 4.0);
        assert_eq!(weights.likes, 1.0);
    }
}
