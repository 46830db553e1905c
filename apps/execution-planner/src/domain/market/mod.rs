//! Market Bounded Context
//!
//! The read-only view of several independent venues that a planning call
//! works against.
//!
//! # Key Concepts
//!
//! - **Order Level**: One price/quantity pair of a book
//! - **Order Book**: Asks ascending and bids descending, best price first
//! - **Venue**: One exchange's book plus its own quote and base balances
//! - **Market Snapshot**: The venues captured together, immutable once built

pub mod snapshot;
pub mod value_objects;

pub use snapshot::MarketSnapshot;
pub use value_objects::{OrderBook, OrderLevel, Venue};
