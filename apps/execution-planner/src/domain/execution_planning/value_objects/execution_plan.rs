//! The result of a successful planning call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Fill;
use crate::domain::shared::OrderSide;

/// Ordered fills that together satisfy a requested quantity.
///
/// Fills appear in the order liquidity was consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    side: OrderSide,
    requested: Decimal,
    fills: Vec<Fill>,
}

impl ExecutionPlan {
    /// Create a plan from its fills.
    #[must_use]
    pub const fn new(side: OrderSide, requested: Decimal, fills: Vec<Fill>) -> Self {
        Self {
            side,
            requested,
            fills,
        }
    }

    /// A plan with nothing to do.
    #[must_use]
    pub const fn empty(side: OrderSide, requested: Decimal) -> Self {
        Self::new(side, requested, Vec::new())
    }

    /// Side of the plan.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Quantity that was requested.
    #[must_use]
    pub const fn requested(&self) -> Decimal {
        self.requested
    }

    /// Fills in execution order.
    #[must_use]
    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    /// Consume the plan and return its fills.
    #[must_use]
    pub fn into_fills(self) -> Vec<Fill> {
        self.fills
    }

    /// Returns true if the plan has no fills.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    /// Sum of fill quantities.
    #[must_use]
    pub fn total_quantity(&self) -> Decimal {
        self.fills.iter().map(|f| f.quantity).sum()
    }

    /// Total cost (buy) or revenue (sell) in the quote currency.
    #[must_use]
    pub fn total_notional(&self) -> Decimal {
        self.fills.iter().map(Fill::notional).sum()
    }

    /// Volume-weighted average price, `None` for an empty plan.
    #[must_use]
    pub fn average_price(&self) -> Option<Decimal> {
        let quantity = self.total_quantity();
        if quantity.is_zero() {
            return None;
        }
        Some(self.total_notional() / quantity)
    }
}
