//! Open-now facet.
//!
//! The reference time is injected when the facet is built, so results are
//! reproducible and testable without a wall clock.

use crate::traits::Facet;
use catalog::Entity;
use chrono::NaiveTime;
use tracing::debug;

/// Keeps entities with a shift covering the reference time.
///
/// ## Algorithm
/// 1. Parse every shift of the entity's operating hours
/// 2. Match if any window contains the reference minute (windows whose close
///    is before their open wrap past midnight)
/// 3. Malformed hours exclude the entity; they are logged, never raised
pub struct OpenNowFacet {
    at: NaiveTime,
}

impl OpenNowFacet {
    pub fn new(at: NaiveTime) -> Self {
        Self { at }
    }
}

impl Facet for OpenNowFacet {
    fn name(&self) -> &str {
        "open_now"
    }

    fn matches(&self, entity: &Entity) -> bool {
        match entity.hours.is_open_at(self.at) {
            Ok(open) => open,
            Err(e) => {
                debug!("Excluding entity {} from open-now: {}", entity.id, e);
                false
            }
        }
    }
}
