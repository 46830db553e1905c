//! Market Value Objects

mod order_book;
mod order_level;
mod venue;

pub use order_book::OrderBook;
pub use order_level::OrderLevel;
pub use venue::Venue;
