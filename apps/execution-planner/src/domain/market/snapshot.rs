//! Market snapshot: the venues a planning call works against.

use serde::{Deserialize, Serialize};

use super::Venue;
use crate::domain::shared::VenueId;

/// Immutable set of venues captured together.
///
/// Built once by a snapshot provider and shared read-only between planning
/// calls; a refresh produces a new snapshot instead of mutating this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    venues: Vec<Venue>,
}

impl MarketSnapshot {
    /// Create a snapshot from venues in discovery order.
    #[must_use]
    pub const fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// Venues in discovery order.
    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Number of venues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// Returns true if the snapshot has no venues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Look up a venue by id.
    #[must_use]
    pub fn venue(&self, id: &VenueId) -> Option<&Venue> {
        self.venues.iter().find(|v| &v.id == id)
    }
}

impl From<Vec<Venue>> for MarketSnapshot {
    fn from(venues: Vec<Venue>) -> Self {
        Self::new(venues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::OrderBook;
    use rust_decimal_macros::dec;

    #[test]
    fn snapshot_lookup() {
        let snapshot = MarketSnapshot::new(vec![
            Venue::new("A", OrderBook::default(), dec!(1), dec!(1)),
            Venue::new("B", OrderBook::default(), dec!(2), dec!(2)),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.is_empty());
        assert_eq!(
            snapshot.venue(&VenueId::from("B")).map(|v| v.quote_balance),
            Some(dec!(2))
        );
        assert!(snapshot.venue(&VenueId::from("C")).is_none());
        assert!(MarketSnapshot::default().is_empty());
    }
}
