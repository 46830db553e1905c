//! A single price level of an order book.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One price level in a book.
///
/// Price and quantity are expected to be non-negative. A zero price is a legal
/// degenerate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLevel {
    /// Price per unit of the base asset, in the quote currency.
    pub price: Decimal,
    /// Quantity of the base asset available at this price.
    pub quantity: Decimal,
}

impl OrderLevel {
    /// Create a new level.
    #[must_use]
    pub const fn new(price: Decimal, quantity: Decimal) -> Self {
        Self { price, quantity }
    }

    /// Quote value of the whole level.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}
