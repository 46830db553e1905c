//! Order-book snapshot adapter.
//!
//! Reads the line-delimited snapshot format: one venue per line, an
//! identifier, a tab, then a JSON order book.

mod loader;
mod raw;

pub use loader::SnapshotLoader;
