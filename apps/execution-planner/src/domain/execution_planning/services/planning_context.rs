//! Call-scoped state of one planning run.
//!
//! Holds a cursor and a working balance per venue plus the priority queue of
//! each venue's next level. Created at the start of `ExecutionPlanner::plan`
//! and dropped when it returns; nothing here outlives a call or touches the
//! caller's venues.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rust_decimal::Decimal;

use crate::domain::execution_planning::value_objects::{ExecutionPlan, Fill};
use crate::domain::market::{OrderLevel, Venue};
use crate::domain::shared::OrderSide;

/// Position of one venue inside its relevant side list.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    /// Index of the level the venue's queue entry points at.
    next_level: usize,
    /// Quote (buy) or base (sell) balance still available at the venue.
    remaining_balance: Decimal,
}

/// Queue entry: the current best level of one venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Offer {
    /// Price for buys, negated price for sells; lower is better.
    key: Decimal,
    /// Insertion order, breaks ties between equal keys.
    sequence: u64,
    /// Index of the venue in the input slice.
    pub(super) venue: usize,
    /// Index of the level in the venue's relevant side list.
    pub(super) level: usize,
}

impl Ord for Offer {
    // BinaryHeap is a max-heap: invert so the lowest key and earliest
    // insertion come out first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Offer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mutable state of a single planning call.
pub(super) struct PlanningContext<'a> {
    venues: &'a [Venue],
    side: OrderSide,
    requested: Decimal,
    remaining: Decimal,
    cursors: Vec<Cursor>,
    offers: BinaryHeap<Offer>,
    next_sequence: u64,
    fills: Vec<Fill>,
}

impl<'a> PlanningContext<'a> {
    /// Open a cursor at the first level of every venue and queue the ones
    /// that have at least one level.
    pub(super) fn new(venues: &'a [Venue], side: OrderSide, requested: Decimal) -> Self {
        let cursors = venues
            .iter()
            .map(|venue| Cursor {
                next_level: 0,
                remaining_balance: venue.balance_for(side),
            })
            .collect();

        let mut context = Self {
            venues,
            side,
            requested,
            remaining: requested,
            cursors,
            offers: BinaryHeap::with_capacity(venues.len()),
            next_sequence: 0,
            fills: Vec::new(),
        };

        for venue in 0..venues.len() {
            context.enqueue(venue);
        }

        context
    }

    /// Quantity still to be planned.
    pub(super) const fn remaining(&self) -> Decimal {
        self.remaining
    }

    /// Side being planned.
    pub(super) const fn side(&self) -> OrderSide {
        self.side
    }

    /// Remove the globally best queued level.
    pub(super) fn pop_best(&mut self) -> Option<Offer> {
        self.offers.pop()
    }

    /// The level an offer points at.
    pub(super) fn level(&self, offer: &Offer) -> OrderLevel {
        self.venues[offer.venue].book.levels(self.side)[offer.level]
    }

    /// Working balance of a venue.
    pub(super) fn balance(&self, venue: usize) -> Decimal {
        self.cursors[venue].remaining_balance
    }

    /// Record a slice and charge it against the target and the venue's balance.
    pub(super) fn record_fill(&mut self, venue: usize, quantity: Decimal, price: Decimal) {
        let spent = match self.side {
            OrderSide::Buy => quantity * price,
            OrderSide::Sell => quantity,
        };
        self.cursors[venue].remaining_balance -= spent;
        self.remaining -= quantity;

        let venue_id = self.venues[venue].id.clone();
        tracing::debug!(
            venue = %venue_id,
            side = %self.side,
            %quantity,
            %price,
            remaining = %self.remaining,
            "Planned fill"
        );
        self.fills.push(Fill::new(venue_id, self.side, quantity, price));
    }

    /// Move a venue past its current level and queue the next one.
    ///
    /// A venue with no balance left can never execute again and is not
    /// re-queued.
    pub(super) fn advance(&mut self, venue: usize) {
        self.cursors[venue].next_level += 1;
        if self.cursors[venue].remaining_balance > Decimal::ZERO {
            self.enqueue(venue);
        }
    }

    /// Consume the context into the plan built so far.
    pub(super) fn into_plan(self) -> ExecutionPlan {
        ExecutionPlan::new(self.side, self.requested, self.fills)
    }

    fn enqueue(&mut self, venue: usize) {
        let level = self.cursors[venue].next_level;
        let Some(entry) = self.venues[venue].book.levels(self.side).get(level) else {
            return;
        };

        let key = match self.side {
            OrderSide::Buy => entry.price,
            OrderSide::Sell => -entry.price,
        };

        self.offers.push(Offer {
            key,
            sequence: self.next_sequence,
            venue,
            level,
        });
        self.next_sequence += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::OrderBook;
    use rust_decimal_macros::dec;

    fn venue(name: &str, asks: &[(Decimal, Decimal)], bids: &[(Decimal, Decimal)]) -> Venue {
        let to_levels = |levels: &[(Decimal, Decimal)]| {
            levels
                .iter()
                .map(|&(p, q)| OrderLevel::new(p, q))
                .collect::<Vec<_>>()
        };
        Venue::new(
            name,
            OrderBook::new(to_levels(asks), to_levels(bids)),
            dec!(100000),
            dec!(100),
        )
    }

    #[test]
    fn buy_queue_pops_lowest_price_first() {
        let venues = vec![
            venue("A", &[(dec!(3100), dec!(1))], &[]),
            venue("B", &[(dec!(3000), dec!(1))], &[]),
        ];
        let mut context = PlanningContext::new(&venues, OrderSide::Buy, dec!(1));

        let first = context.pop_best().unwrap();
        assert_eq!(first.venue, 1);
        let second = context.pop_best().unwrap();
        assert_eq!(second.venue, 0);
        assert!(context.pop_best().is_none());
    }

    #[test]
    fn sell_queue_pops_highest_price_first() {
        let venues = vec![
            venue("A", &[], &[(dec!(2900), dec!(1))]),
            venue("B", &[], &[(dec!(3000), dec!(1))]),
        ];
        let mut context = PlanningContext::new(&venues, OrderSide::Sell, dec!(1));

        assert_eq!(context.pop_best().unwrap().venue, 1);
        assert_eq!(context.pop_best().unwrap().venue, 0);
    }

    #[test]
    fn equal_prices_pop_in_discovery_order() {
        let venues = vec![
            venue("A", &[(dec!(3000), dec!(1))], &[]),
            venue("B", &[(dec!(3000), dec!(1))], &[]),
            venue("C", &[(dec!(3000), dec!(1))], &[]),
        ];
        let mut context = PlanningContext::new(&venues, OrderSide::Buy, dec!(1));

        let order: Vec<usize> = std::iter::from_fn(|| context.pop_best())
            .map(|o| o.venue)
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn venues_without_levels_are_not_queued() {
        let venues = vec![
            venue("A", &[], &[(dec!(2900), dec!(1))]),
            venue("B", &[(dec!(3000), dec!(1))], &[]),
        ];
        let mut context = PlanningContext::new(&venues, OrderSide::Buy, dec!(1));

        assert_eq!(context.pop_best().unwrap().venue, 1);
        assert!(context.pop_best().is_none());
    }

    #[test]
    fn advance_queues_next_level_until_exhausted() {
        let venues = vec![venue(
            "A",
            &[(dec!(3000), dec!(1)), (dec!(3010), dec!(1))],
            &[],
        )];
        let mut context = PlanningContext::new(&venues, OrderSide::Buy, dec!(2));

        let first = context.pop_best().unwrap();
        assert_eq!(first.level, 0);
        context.advance(first.venue);

        let second = context.pop_best().unwrap();
        assert_eq!(second.level, 1);
        assert_eq!(context.level(&second).price, dec!(3010));
        context.advance(second.venue);

        assert!(context.pop_best().is_none());
    }

    #[test]
    fn record_fill_charges_quote_balance_on_buy() {
        let venues = vec![venue("A", &[(dec!(3000), dec!(10))], &[])];
        let mut context = PlanningContext::new(&venues, OrderSide::Buy, dec!(2));

        context.record_fill(0, dec!(2), dec!(3000));

        assert_eq!(context.balance(0), dec!(94000));
        assert_eq!(context.remaining(), Decimal::ZERO);
        assert_eq!(context.side(), OrderSide::Buy);
        assert_eq!(context.into_plan().fills().len(), 1);
    }

    #[test]
    fn record_fill_charges_base_balance_on_sell() {
        let venues = vec![venue("A", &[], &[(dec!(3000), dec!(10))])];
        let mut context = PlanningContext::new(&venues, OrderSide::Sell, dec!(5));

        context.record_fill(0, dec!(2), dec!(3000));

        assert_eq!(context.balance(0), dec!(98));
        assert_eq!(context.remaining(), dec!(3));
    }

    #[test]
    fn exhausted_venue_is_not_requeued() {
        let mut only = venue(
            "A",
            &[(dec!(3000), dec!(1)), (dec!(3010), dec!(1))],
            &[],
        );
        only.quote_balance = dec!(3000);
        let venues = vec![only];
        let mut context = PlanningContext::new(&venues, OrderSide::Buy, dec!(2));

        let first = context.pop_best().unwrap();
        context.record_fill(first.venue, dec!(1), dec!(3000));
        context.advance(first.venue);

        assert!(context.pop_best().is_none());
    }
}
