//! Snapshot source configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where the order-book snapshot comes from and how venues are seeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Path of the line-delimited snapshot file.
    #[serde(default = "default_path")]
    pub path: String,
    /// Venue names are this prefix followed by the 1-based record number.
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
    /// Starting quote balance of every venue.
    #[serde(default = "default_quote_balance")]
    pub quote_balance: Decimal,
    /// Starting base balance of every venue.
    #[serde(default = "default_base_balance")]
    pub base_balance: Decimal,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            name_prefix: default_name_prefix(),
            quote_balance: default_quote_balance(),
            base_balance: default_base_balance(),
        }
    }
}

fn default_path() -> String {
    "order_books_data.json".to_string()
}

fn default_name_prefix() -> String {
    "Exchange".to_string()
}

const fn default_quote_balance() -> Decimal {
    Decimal::from_parts(100_000, 0, 0, false, 0)
}

const fn default_base_balance() -> Decimal {
    Decimal::from_parts(100, 0, 0, false, 0)
}
