//! Time-ordered history of rankings.
//!
//! Deltas are only meaningful between consecutive rankings, so the log keeps
//! rankings keyed by timestamp and refuses to accept one that is not strictly
//! newer than everything already stored.

use crate::delta::{TrendingEntry, compare};
use crate::error::{Result, TrendingError};
use crate::rank::Ranking;
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct RankingLog {
    rankings: BTreeMap<i64, Ranking>,
}

impl RankingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ranking.
    ///
    /// # Errors
    /// `OutOfOrderSnapshot` if `ranking` is not strictly after the latest entry.
    pub fn push(&mut self, ranking: Ranking) -> Result<()> {
        if let Some(latest) = self.latest_timestamp().filter(|&l| ranking.timestamp() <= l) {
            warn!(
                "Rejecting ranking at {} (latest is {})",
                ranking.timestamp(),
                latest
            );
            return Err(TrendingError::OutOfOrderSnapshot {
                timestamp: ranking.timestamp(),
                latest,
            });
        }
        debug!("Recorded ranking at {}", ranking.timestamp());
        self.rankings.insert(ranking.timestamp(), ranking);
        Ok(())
    }

    pub fn latest(&self) -> Option<&Ranking> {
        self.rankings.values().next_back()
    }

    pub fn latest_timestamp(&self) -> Option<i64> {
        self.rankings.keys().next_back().copied()
    }

    pub fn get(&self, timestamp: i64) -> Option<&Ranking> {
        self.rankings.get(&timestamp)
    }

    /// The ranking immediately before `timestamp`
    pub fn before(&self, timestamp: i64) -> Option<&Ranking> {
        self.rankings.range(..timestamp).next_back().map(|(_, r)| r)
    }

    /// Deltas of the ranking at `timestamp` against its predecessor
    pub fn deltas_at(&self, timestamp: i64) -> Option<Vec<TrendingEntry>> {
        let current = self.get(timestamp)?;
        Some(compare(self.before(timestamp), current))
    }

    /// Deltas of the latest ranking; `None` if the log is empty
    pub fn latest_deltas(&self) -> Option<Vec<TrendingEntry>> {
        self.deltas_at(self.latest_timestamp()?)
    }

    /// Drop every ranking older than `timestamp`
    pub fn prune_before(&mut self, timestamp: i64) {
        self.rankings = self.rankings.split_off(&timestamp);
    }

    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::Direction;
    use crate::rank::rank;
    use crate::weights::TrendingWeights;
    use catalog::EngagementSnapshot;

    fn ranking_at(timestamp: i64, likes: &[(u32, u64)]) -> Ranking {
        let snapshots: Vec<EngagementSnapshot> = likes
            .iter()
            .map(|&(id, likes)| EngagementSnapshot {
                likes,
                ..EngagementSnapshot::empty(id, timestamp)
            })
            .collect();
        rank(&snapshots, &TrendingWeights::default()).unwrap()
    }

    #[test]
    fn test_push_requires_increasing_timestamps() {
        let mut log = RankingLog::new();
        log.push(ranking_at(100, &[(1, 1)])).unwrap();
        log.push(ranking_at(200, &[(1, 1)])).unwrap();

        let err = log.push(ranking_at(200, &[(1, 1)])).unwrap_err();
        assert!(matches!(
            err,
            TrendingError::OutOfOrderSnapshot {
                timestamp: 200,
                latest: 200
            }
        ));
        assert!(log.push(ranking_at(150, &[(1, 1)])).is_err());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_latest_deltas() {
        let mut log = RankingLog::new();
        assert!(log.latest_deltas().is_none());

        log.push(ranking_at(100, &[(1, 9), (2, 5)])).unwrap();
        let first = log.latest_deltas().unwrap();
        assert!(first.iter().all(|e| e.delta.direction == Direction::New));

        log.push(ranking_at(200, &[(1, 2), (2, 5), (3, 1)])).unwrap();
        let deltas = log.latest_deltas().unwrap();
        let summary: Vec<(u32, Direction)> = deltas
            .iter()
            .map(|e| (e.entry.entity_id, e.delta.direction))
            .collect();
        assert_eq!(
            summary,
            vec![(2, Direction::Up), (1, Direction::Down), (3, Direction::New)]
        );
    }

    #[test]
    fn test_deltas_at_uses_immediate_predecessor() {
        let mut log = RankingLog::new();
        log.push(ranking_at(100, &[(1, 1), (2, 9)])).unwrap();
        log.push(ranking_at(200, &[(1, 9), (2, 1)])).unwrap();
        log.push(ranking_at(300, &[(1, 9), (2, 1)])).unwrap();

        let middle = log.deltas_at(200).unwrap();
        assert_eq!(middle[0].entry.entity_id, 1);
        assert_eq!(middle[0].delta.direction, Direction::Up);

        let last = log.latest_deltas().unwrap();
        assert!(last.iter().all(|e| e.delta.direction == Direction::Stable));
        assert!(log.deltas_at(250).is_none());
    }

    #[test]
    fn test_prune_before() {
        let mut log = RankingLog::new();
        for ts in [100, 200, 300] {
            log.push(ranking_at(ts, &[(1, 1)])).unwrap();
        }
        log.prune_before(200);
        assert_eq!(log.len(), 2);
        assert!(log.get(100).is_none());
        assert_eq!(log.latest_timestamp(), Some(300));
    }
}
