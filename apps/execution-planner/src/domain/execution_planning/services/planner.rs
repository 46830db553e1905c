//! Execution Planner Domain Service
//!
//! Greedy best-price merge across the books of several venues. Every venue
//! contributes its next level to a priority queue; the globally best level is
//! consumed first, bounded by the level's quantity, the venue's working
//! balance and the quantity still to plan. This is a k-way merge over sorted
//! price lists.
//!
//! Consuming liquidity strictly in price order is optimal here: units are
//! divisible, independently priced, and balance limits are per venue, so any
//! plan that takes a worse unit while a better one is unused can be improved
//! by swapping them.

use rust_decimal::{Decimal, RoundingStrategy};

use super::planning_context::PlanningContext;
use crate::domain::execution_planning::errors::PlanningError;
use crate::domain::execution_planning::value_objects::ExecutionPlan;
use crate::domain::market::Venue;
use crate::domain::shared::{MIN_TRADABLE_UNIT, OrderSide};

/// Plans the best execution of a quantity across venues.
///
/// Stateless between calls: all working state lives in a per-call context, so
/// one planner can serve concurrent requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionPlanner {
    min_tradable_unit: Decimal,
}

impl Default for ExecutionPlanner {
    fn default() -> Self {
        Self::new(MIN_TRADABLE_UNIT)
    }
}

impl ExecutionPlanner {
    /// Create a planner with a custom minimum tradable unit.
    #[must_use]
    pub const fn new(min_tradable_unit: Decimal) -> Self {
        Self { min_tradable_unit }
    }

    /// The quantity below which amounts are treated as noise.
    #[must_use]
    pub const fn min_tradable_unit(&self) -> Decimal {
        self.min_tradable_unit
    }

    /// Plan the execution of `target` units on `side` across `venues`.
    ///
    /// Returns an empty plan when `target` does not exceed the minimum
    /// tradable unit.
    /// Fails with [`PlanningError::InsufficientLiquidity`] when the venues'
    /// balance-constrained liquidity cannot cover `target`; no partial plan
    /// is returned in that case.
    pub fn plan(
        &self,
        venues: &[Venue],
        side: OrderSide,
        target: Decimal,
    ) -> Result<ExecutionPlan, PlanningError> {
        if target <= self.min_tradable_unit {
            return Ok(ExecutionPlan::empty(side, target));
        }

        if venues.is_empty() {
            return Err(PlanningError::InsufficientLiquidity {
                side,
                requested: target,
                unfilled: target,
            });
        }

        let mut context = PlanningContext::new(venues, side, target);

        while context.remaining() > self.min_tradable_unit {
            let Some(offer) = context.pop_best() else {
                break;
            };

            let level = context.level(&offer);
            let capacity =
                self.balance_capacity(context.side(), context.balance(offer.venue), level.price);
            let executable = level.quantity.min(capacity);
            let take = context.remaining().min(executable);

            if take >= self.min_tradable_unit {
                context.record_fill(offer.venue, take, level.price);
            }

            context.advance(offer.venue);
        }

        let unfilled = context.remaining();
        if unfilled > self.min_tradable_unit {
            tracing::debug!(%side, requested = %target, %unfilled, "Plan infeasible");
            return Err(PlanningError::InsufficientLiquidity {
                side,
                requested: target,
                unfilled,
            });
        }

        Ok(context.into_plan())
    }

    /// Base quantity a venue's working balance can cover at `price`.
    ///
    /// Sells are limited by the base balance alone. Buys are limited by
    /// `quote / price`, truncated to the unit's scale so the charged notional
    /// never exceeds the balance; a zero price yields no capacity.
    fn balance_capacity(&self, side: OrderSide, balance: Decimal, price: Decimal) -> Decimal {
        if balance <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        match side {
            OrderSide::Sell => balance,
            OrderSide::Buy if price > Decimal::ZERO => balance
                .checked_div(price)
                .unwrap_or(Decimal::MAX)
                .round_dp_with_strategy(self.min_tradable_unit.scale(), RoundingStrategy::ToZero),
            OrderSide::Buy => Decimal::ZERO,
        }
    }
}
