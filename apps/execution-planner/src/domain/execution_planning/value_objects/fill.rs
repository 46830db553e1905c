//! A planned partial execution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{OrderSide, VenueId};

/// One planned slice against one price level at one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    /// Venue the slice executes on.
    pub venue: VenueId,
    /// Side of the slice.
    pub side: OrderSide,
    /// Base quantity of the slice.
    pub quantity: Decimal,
    /// Price per unit of the level consumed.
    pub price: Decimal,
}

impl Fill {
    /// Create a new fill.
    #[must_use]
    pub const fn new(venue: VenueId, side: OrderSide, quantity: Decimal, price: Decimal) -> Self {
        Self {
            venue,
            side,
            quantity,
            price,
        }
    }

    /// Quote amount paid (buy) or received (sell) for this slice.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.quantity * self.price
    }
}
