//! Order book of a single venue.

use serde::{Deserialize, Serialize};

use super::OrderLevel;
use crate::domain::shared::OrderSide;

/// Asks and bids of one venue, best price first.
///
/// Asks are expected ascending by price and bids descending. The planner relies
/// on this order only within a single venue and consumes each list strictly in
/// sequence; it never re-sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Sell offers, ascending by price.
    pub asks: Vec<OrderLevel>,
    /// Buy offers, descending by price.
    pub bids: Vec<OrderLevel>,
}

impl OrderBook {
    /// Create a book from its two sides.
    #[must_use]
    pub const fn new(asks: Vec<OrderLevel>, bids: Vec<OrderLevel>) -> Self {
        Self { asks, bids }
    }

    /// The side of the book an order of `side` trades against.
    ///
    /// Buying consumes asks, selling consumes bids.
    #[must_use]
    pub fn levels(&self, side: OrderSide) -> &[OrderLevel] {
        match side {
            OrderSide::Buy => &self.asks,
            OrderSide::Sell => &self.bids,
        }
    }

    /// Lowest ask, if any.
    #[must_use]
    pub fn best_ask(&self) -> Option<&OrderLevel> {
        self.asks.first()
    }

    /// Highest bid, if any.
    #[must_use]
    pub fn best_bid(&self) -> Option<&OrderLevel> {
        self.bids.first()
    }

    /// Returns true if asks ascend and bids descend by price.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        self.asks.windows(2).all(|w| w[0].price <= w[1].price)
            && self.bids.windows(2).all(|w| w[0].price >= w[1].price)
    }
}
