//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod order_side;

pub use identifiers::VenueId;
pub use order_side::{OrderSide, ParseOrderSideError};
