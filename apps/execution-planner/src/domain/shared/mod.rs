//! Shared Domain Types
//!
//! Value objects and constants shared across bounded contexts.

pub mod value_objects;

use rust_decimal::Decimal;

pub use value_objects::{OrderSide, ParseOrderSideError, VenueId};

/// Smallest asset quantity considered significant (one satoshi).
///
/// Slices strictly below this value are treated as numeric noise, and a
/// remainder of at most one unit counts as filled.
pub const MIN_TRADABLE_UNIT: Decimal = Decimal::from_parts(1, 0, 0, false, 8);
