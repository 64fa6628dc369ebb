//! Rank movement between two rankings.
//!
//! Rank 1 is best, so moving from rank 5 to rank 2 is `Up` with magnitude 3
//! and moving from rank 2 to rank 5 is `Down` with magnitude -3. Entities
//! absent from the previous ranking are `New` with magnitude 0.

use crate::rank::Ranking;
use catalog::EntityId;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub entity_id: EntityId,
    pub current_rank: u32,
    pub previous_rank: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stable,
    New,
}

impl Direction {
    /// Arrow used when rendering a delta
    pub fn symbol(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Stable => "-",
            Direction::New => "NEW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankDelta {
    pub direction: Direction,
    /// `previous_rank - current_rank`: positive when moving up, 0 for `Stable` and `New`
    pub magnitude: i64,
}

/// Compute the movement of one entry
pub fn delta(entry: &RankEntry) -> RankDelta {
    let Some(previous) = entry.previous_rank else {
        return RankDelta {
            direction: Direction::New,
            magnitude: 0,
        };
    };

    let magnitude = i64::from(previous) - i64::from(entry.current_rank);
    let direction = match magnitude.cmp(&0) {
        Ordering::Greater => Direction::Up,
        Ordering::Less => Direction::Down,
        Ordering::Equal => Direction::Stable,
    };
    RankDelta {
        direction,
        magnitude,
    }
}

/// One row of the trending list: rank, score and movement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendingEntry {
    #[serde(flatten)]
    pub entry: RankEntry,
    pub score: f64,
    pub delta: RankDelta,
}

/// Pair every entry of `current` with its rank in `previous`.
///
/// Output follows `current`'s rank order. Without a previous ranking every
/// entry is `New`. Entities that dropped out of `current` are not reported.
pub fn compare(previous: Option<&Ranking>, current: &Ranking) -> Vec<TrendingEntry> {
    current
        .entries()
        .iter()
        .map(|ranked| {
            let entry = RankEntry {
                entity_id: ranked.entity_id,
                current_rank: ranked.rank,
                previous_rank: previous.and_then(|p| p.rank_of(ranked.entity_id)),
            };
            TrendingEntry {
                entry,
                score: ranked.score,
                delta: delta(&entry),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::rank;
    use crate::weights::TrendingWeights;
    use catalog::EngagementSnapshot;

    fn entry(current_rank: u32, previous_rank: Option<u32>) -> RankEntry {
        RankEntry {
            entity_id: 1,
            current_rank,
            previous_rank,
        }
    }

    #[test]
    fn test_delta_directions() {
        assert_eq!(
            delta(&entry(2, Some(5))),
            RankDelta {
                direction: Direction::Up,
                magnitude: 3
            }
        );
        assert_eq!(
            delta(&entry(7, Some(3))),
            RankDelta {
                direction: Direction::Down,
                magnitude: -4
            }
        );
        assert_eq!(delta(&entry(4, Some(4))).direction, Direction::Stable);
        assert_eq!(delta(&entry(4, Some(4))).magnitude, 0);
    }

    #[test]
    fn test_new_entrant() {
        let d = delta(&entry(1, None));
        assert_eq!(d.direction, Direction::New);
        assert_eq!(d.magnitude, 0);
    }

    #[test]
    fn test_compare_without_previous_is_all_new() {
        let snapshots = [EngagementSnapshot::empty(1, 10), EngagementSnapshot::empty(2, 10)];
        let current = rank(&snapshots, &TrendingWeights::default()).unwrap();
        let entries = compare(None, &current);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.delta.direction == Direction::New));
    }

    #[test]
    fn test_compare_follows_current_order() {
        let mut a = EngagementSnapshot::empty(1, 10);
        a.likes = 10;
        let mut b = EngagementSnapshot::empty(2, 10);
        b.likes = 5;
        let previous = rank(&[a, b], &TrendingWeights::default()).unwrap();

        a.timestamp = 20;
        b.timestamp = 20;
        b.recent_reviews = 10;
        let current = rank(&[a, b], &TrendingWeights::default()).unwrap();

        let entries = compare(Some(&previous), &current);
        assert_eq!(entries[0].entry.entity_id, 2);
        assert_eq!(entries[0].delta.direction, Direction::Up);
        assert_eq!(entries[0].delta.magnitude, 1);
        assert_eq!(entries[1].entry.entity_id, 1);
        assert_eq!(entries[1].delta.direction, Direction::Down);
        assert_eq!(entries[1].delta.magnitude, -1);
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::New).unwrap();
        assert_eq!(json, "\"new\"");
    }
}
