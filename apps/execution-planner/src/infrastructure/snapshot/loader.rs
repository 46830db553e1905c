//! Snapshot file loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use super::raw::{RawOrderBook, RawOrderWrapper};
use crate::application::ports::SnapshotError;
use crate::config::SnapshotConfig;
use crate::domain::market::{MarketSnapshot, OrderBook, OrderLevel, Venue};
use crate::domain::shared::VenueId;

/// Builds a [`MarketSnapshot`] from the line-delimited snapshot format.
///
/// Venues are named `{name_prefix}{n}` in file order starting at 1 and
/// seeded with the configured starting balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLoader {
    name_prefix: String,
    quote_balance: Decimal,
    base_balance: Decimal,
}

impl SnapshotLoader {
    /// Create a loader.
    #[must_use]
    pub fn new(
        name_prefix: impl Into<String>,
        quote_balance: Decimal,
        base_balance: Decimal,
    ) -> Self {
        Self {
            name_prefix: name_prefix.into(),
            quote_balance,
            base_balance,
        }
    }

    /// Create a loader from the snapshot configuration.
    #[must_use]
    pub fn from_config(config: &SnapshotConfig) -> Self {
        Self::new(
            config.name_prefix.clone(),
            config.quote_balance,
            config.base_balance,
        )
    }

    /// Load a snapshot file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<MarketSnapshot, SnapshotError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let snapshot = self.parse(BufReader::new(file), &path.display().to_string())?;

        tracing::info!(
            path = %path.display(),
            venues = snapshot.len(),
            "Loaded order book snapshot"
        );

        Ok(snapshot)
    }

    /// Parse snapshot records from a reader; `source` names it in errors.
    pub fn parse<R: BufRead>(
        &self,
        reader: R,
        source: &str,
    ) -> Result<MarketSnapshot, SnapshotError> {
        let mut venues = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source_err| SnapshotError::Io {
                path: source.to_string(),
                source: source_err,
            })?;
            let line_number = index + 1;

            // Records without an identifier column are not order books
            let Some((_, json)) = line.split_once('\t') else {
                continue;
            };

            let raw: Option<RawOrderBook> =
                serde_json::from_str(json).map_err(|e| SnapshotError::Parse {
                    line: line_number,
                    message: e.to_string(),
                })?;
            let Some(raw) = raw else {
                continue;
            };

            let venue = self.build_venue(venues.len() + 1, raw);
            if !venue.book.is_well_ordered() {
                tracing::warn!(
                    venue = %venue.id,
                    line = line_number,
                    "Order book is not sorted best-first; levels are used in file order"
                );
            }
            venues.push(venue);
        }

        Ok(MarketSnapshot::new(venues))
    }

    fn build_venue(&self, ordinal: usize, raw: RawOrderBook) -> Venue {
        let id = VenueId::numbered(&self.name_prefix, ordinal);
        let book = OrderBook::new(to_levels(raw.asks), to_levels(raw.bids));
        let venue = Venue::new(id, book, self.quote_balance, self.base_balance);

        match raw.acq_time.as_deref().map(parse_acquisition_time) {
            Some(Some(acquired_at)) => venue.with_acquired_at(acquired_at),
            Some(None) => {
                tracing::warn!(venue = %venue.id, "Unparseable AcqTime, ignoring");
                venue
            }
            None => venue,
        }
    }
}

fn to_levels(orders: Vec<RawOrderWrapper>) -> Vec<OrderLevel> {
    orders
        .into_iter()
        .map(|w| OrderLevel::new(w.order.price, w.order.amount))
        .collect()
}

/// Parse an RFC 3339 time, or a naive ISO-8601 time taken as UTC.
fn parse_acquisition_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
