//! Wire types of the snapshot file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One order book as serialized in the snapshot file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawOrderBook {
    /// Acquisition time of the book.
    #[serde(default)]
    pub acq_time: Option<String>,
    /// Bids, best first.
    #[serde(default)]
    pub bids: Vec<RawOrderWrapper>,
    /// Asks, best first.
    #[serde(default)]
    pub asks: Vec<RawOrderWrapper>,
}

/// Envelope around a single resting order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawOrderWrapper {
    pub order: RawOrder,
}

/// A resting order; unknown fields (ids, kinds, timestamps) are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawOrder {
    pub price: Decimal,
    pub amount: Decimal,
}
