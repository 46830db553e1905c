//! A venue: one exchange's book plus the balances held there.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderBook;
use crate::domain::shared::{OrderSide, VenueId};

/// One exchange's order book and the balances available on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Unique key of the venue.
    pub id: VenueId,
    /// Order book snapshot.
    pub book: OrderBook,
    /// Quote currency available to spend when buying here.
    pub quote_balance: Decimal,
    /// Base asset available to sell here.
    pub base_balance: Decimal,
    /// When the book was captured, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquired_at: Option<DateTime<Utc>>,
}

impl Venue {
    /// Create a venue with no acquisition time.
    #[must_use]
    pub fn new(
        id: impl Into<VenueId>,
        book: OrderBook,
        quote_balance: Decimal,
        base_balance: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            book,
            quote_balance,
            base_balance,
            acquired_at: None,
        }
    }

    /// Attach the capture time of the book.
    #[must_use]
    pub fn with_acquired_at(mut self, acquired_at: DateTime<Utc>) -> Self {
        self.acquired_at = Some(acquired_at);
        self
    }

    /// Balance that limits an order of `side`: quote for buys, base for sells.
    #[must_use]
    pub const fn balance_for(&self, side: OrderSide) -> Decimal {
        match side {
            OrderSide::Buy => self.quote_balance,
            OrderSide::Sell => self.base_balance,
        }
    }
}
