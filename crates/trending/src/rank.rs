//! Dense ranking of one batch of engagement snapshots.

use crate::error::{Result, TrendingError};
use crate::score::TrendingScorer;
use crate::weights::TrendingWeights;
use catalog::{EngagementSnapshot, EntityId};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// One scored entity within a ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked {
    pub entity_id: EntityId,
    pub score: f64,
    /// 1-based; 1 is the most trending
    pub rank: u32,
}

/// A complete ranking at one point in time.
///
/// Ranks are dense (1..=n, no gaps or shared ranks): entries are ordered by
/// score descending and equal scores are broken by ascending entity id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    timestamp: i64,
    entries: Vec<Ranked>,
    positions: HashMap<EntityId, usize>,
}

impl Ranking {
    /// The capture time of this ranking (latest snapshot timestamp, 0 if empty)
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Entries in rank order
    pub fn entries(&self) -> &[Ranked] {
        &self.entries
    }

    pub fn get(&self, entity_id: EntityId) -> Option<&Ranked> {
        self.positions.get(&entity_id).map(|&i| &self.entries[i])
    }

    pub fn rank_of(&self, entity_id: EntityId) -> Option<u32> {
        self.get(entity_id).map(|r| r.rank)
    }

    /// The first `n` entries
    pub fn top(&self, n: usize) -> &[Ranked] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TrendingScorer {
    /// Score every snapshot and assign dense ranks.
    ///
    /// Scoring runs in parallel; ordering is deterministic regardless of
    /// input order.
    ///
    /// # Errors
    /// `DuplicateEntity` if an entity has more than one snapshot in the batch.
    #[instrument(skip_all, fields(snapshots = snapshots.len()))]
    pub fn rank(&self, snapshots: &[EngagementSnapshot]) -> Result<Ranking> {
        let mut seen = HashSet::with_capacity(snapshots.len());
        for snapshot in snapshots {
            if !seen.insert(snapshot.entity_id) {
                return Err(TrendingError::DuplicateEntity(snapshot.entity_id));
            }
        }

        let mut entries: Vec<Ranked> = snapshots
            .par_iter()
            .map(|snapshot| Ranked {
                entity_id: snapshot.entity_id,
                score: self.score(snapshot),
                rank: 0,
            })
            .collect();

        entries.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.entity_id.cmp(&b.entity_id))
        });

        let mut positions = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = (i + 1) as u32;
            positions.insert(entry.entity_id, i);
        }

        let timestamp = snapshots.iter().map(|s| s.timestamp).max().unwrap_or(0);
        debug!("Ranked {} entities at {}", entries.len(), timestamp);

        Ok(Ranking {
            timestamp,
            entries,
            positions,
        })
    }
}

/// Rank a batch of snapshots with the given weights
pub fn rank(snapshots: &[EngagementSnapshot], weights: &TrendingWeights) -> Result<Ranking> {
    TrendingScorer::new(*weights)?.rank(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(snapshots: &[EngagementSnapshot]) -> Ranking {
        rank(snapshots, &TrendingWeights::default()).unwrap()
    }

    fn snapshot(entity_id: EntityId, likes: u64, recent_reviews: u64) -> EngagementSnapshot {
        EngagementSnapshot {
            likes,
            recent_reviews,
            ..EngagementSnapshot::empty(entity_id, 100)
        }
    }

    #[test]
    fn test_rank_orders_by_score() {
        let ranking = ranked(&[snapshot(1, 10, 0), snapshot(2, 0, 10), snapshot(3, 5, 0)]);

        let order: Vec<EntityId> = ranking.entries().iter().map(|r| r.entity_id).collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert_eq!(ranking.rank_of(2), Some(1));
        assert_eq!(ranking.rank_of(3), Some(3));
        assert_eq!(ranking.rank_of(99), None);
    }

    #[test]
    fn test_ties_are_dense_and_broken_by_id() {
        let ranking = ranked(&[snapshot(9, 4, 0), snapshot(4, 4, 0), snapshot(7, 4, 0)]);

        let ranks: Vec<(EntityId, u32)> = ranking
            .entries()
            .iter()
            .map(|r| (r.entity_id, r.rank))
            .collect();
        assert_eq!(ranks, vec![(4, 1), (7, 2), (9, 3)]);
    }

    #[test]
    fn test_rank_is_independent_of_input_order() {
        let forward = vec![snapshot(1, 3, 1), snapshot(2, 8, 0), snapshot(3, 1, 2)];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(ranked(&forward).entries(), ranked(&backward).entries());
    }

    #[test]
    fn test_duplicate_entity_is_rejected() {
        let result = rank(&[snapshot(1, 1, 0), snapshot(1, 2, 0)], &TrendingWeights::default());
        assert!(matches!(result, Err(TrendingError::DuplicateEntity(1))));
    }

    #[test]
    fn test_invalid_weights_are_rejected() {
        let weights = TrendingWeights::default().with_views(50.0);
        let result = rank(&[snapshot(1, 1, 0)], &weights);
        assert!(matches!(result, Err(TrendingError::InvalidWeights(_))));
    }

    #[test]
    fn test_empty_batch() {
        let ranking = ranked(&[]);
        assert!(ranking.is_empty());
        assert_eq!(ranking.timestamp(), 0);
        assert!(ranking.top(5).is_empty());
    }

    #[test]
    fn test_timestamp_is_latest_snapshot() {
        let mut late = snapshot(2, 1, 0);
        late.timestamp = 250;
        let ranking = ranked(&[snapshot(1, 1, 0), late]);
        assert_eq!(ranking.timestamp(), 250);
        assert_eq!(ranking.top(1).len(), 1);
    }
}
