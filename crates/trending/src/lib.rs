//! Trending scores and rank movement.
//!
//! This crate provides:
//! - `TrendingWeights`, the tunable weights (defaults, builders, JSON file)
//! - `score` / `TrendingScorer` for the weighted engagement score
//! - `rank` / `TrendingScorer::rank` for dense, deterministic rankings
//! - `delta` / `compare` for rank movement between two rankings
//! - `RankingLog` for a time-ordered history of rankings
//!
//! ## Example Usage
//! ```ignore
//! use trending::{RankingLog, TrendingScorer, TrendingWeights};
//!
//! let scorer = TrendingScorer::new(TrendingWeights::default())?;
//! let mut log = RankingLog::new();
//! log.push(scorer.rank(&yesterday)?)?;
//! log.push(scorer.rank(&today)?)?;
//! for row in log.latest_deltas().unwrap_or_default() {
//!     println!("{} {} {}", row.entry.current_rank, row.delta.direction.symbol(), row.score);
//! }
//! ```

pub mod delta;
pub mod error;
pub mod log;
pub mod rank;
pub mod score;
pub mod weights;

// Re-export main types
pub use delta::{Direction, RankDelta, RankEntry, TrendingEntry, compare, delta};
pub use error::{Result, TrendingError};
pub use log::RankingLog;
pub use rank::{Ranked, Ranking, rank};
pub use score::{TrendingScorer, score};
pub use weights::TrendingWeights;
