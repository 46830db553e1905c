//! Execution plan DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::execution_planning::{ExecutionPlan, Fill};
use crate::domain::shared::OrderSide;

/// Request to plan the execution of an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequestDto {
    /// Side.
    pub side: OrderSide,
    /// Base quantity to buy or sell.
    pub amount: Decimal,
}

/// DTO representing a planned fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillDto {
    /// Venue name.
    pub venue: String,
    /// Side.
    pub side: OrderSide,
    /// Base quantity.
    pub quantity: Decimal,
    /// Price per unit.
    pub price: Decimal,
}

impl From<Fill> for FillDto {
    fn from(fill: Fill) -> Self {
        Self {
            venue: fill.venue.into_inner(),
            side: fill.side,
            quantity: fill.quantity,
            price: fill.price,
        }
    }
}

/// DTO for a complete execution plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponseDto {
    /// Correlation id of this plan.
    pub plan_id: String,
    /// Side.
    pub side: OrderSide,
    /// Requested quantity.
    pub requested: Decimal,
    /// Fills in execution order.
    pub fills: Vec<FillDto>,
    /// Sum of fill quantities.
    pub total_quantity: Decimal,
    /// Total cost (buy) or revenue (sell).
    pub total_notional: Decimal,
    /// Volume-weighted average price (absent for an empty plan).
    pub average_price: Option<Decimal>,
}

impl PlanResponseDto {
    /// Create from a domain plan.
    #[must_use]
    pub fn from_plan(plan_id: impl Into<String>, plan: ExecutionPlan) -> Self {
        let total_quantity = plan.total_quantity();
        let total_notional = plan.total_notional();
        let average_price = plan.average_price();
        let side = plan.side();
        let requested = plan.requested();

        Self {
            plan_id: plan_id.into(),
            side,
            requested,
            fills: plan.into_fills().into_iter().map(FillDto::from).collect(),
            total_quantity,
            total_notional,
            average_price,
        }
    }
}
