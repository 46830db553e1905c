//! Snapshot Provider Port (Driven Port)
//!
//! Interface for obtaining the market snapshot a planning call works against.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::market::MarketSnapshot;

/// Errors from snapshot providers.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// No snapshot has been loaded.
    #[error("Market snapshot unavailable: {reason}")]
    Unavailable {
        /// Why no snapshot is available.
        reason: String,
    },

    /// The snapshot source could not be read.
    #[error("Failed to read snapshot '{path}': {source}")]
    Io {
        /// Path of the source.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// A record of the snapshot source is malformed.
    #[error("Malformed snapshot record on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Parser message.
        message: String,
    },
}

/// Port supplying market snapshots.
///
/// Implementations return a shared, immutable snapshot. A planning call
/// captures it once, so a concurrent refresh never changes the data an
/// in-flight plan is looking at.
#[async_trait]
pub trait SnapshotProviderPort: Send + Sync {
    /// The snapshot to plan against.
    async fn current_snapshot(&self) -> Result<Arc<MarketSnapshot>, SnapshotError>;
}

/// Snapshot provider backed by a snapshot held in memory.
///
/// Loaded once at startup; `replace` swaps in a refreshed snapshot without
/// affecting calls that already captured the previous one.
#[derive(Debug, Default)]
pub struct InMemorySnapshotProvider {
    snapshot: RwLock<Option<Arc<MarketSnapshot>>>,
}

impl InMemorySnapshotProvider {
    /// Create a provider serving `snapshot`.
    #[must_use]
    pub fn new(snapshot: MarketSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(Arc::new(snapshot))),
        }
    }

    /// Create a provider with nothing loaded yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Swap in a new snapshot.
    pub fn replace(&self, snapshot: MarketSnapshot) {
        let mut current = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = Some(Arc::new(snapshot));
    }

    /// Number of venues in the current snapshot (0 when none is loaded).
    #[must_use]
    pub fn venue_count(&self) -> usize {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(0, |s| s.len())
    }
}

#[async_trait]
impl SnapshotProviderPort for InMemorySnapshotProvider {
    async fn current_snapshot(&self) -> Result<Arc<MarketSnapshot>, SnapshotError> {
        let current = self
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        current.as_ref().map(Arc::clone).ok_or_else(|| SnapshotError::Unavailable {
            reason: "no snapshot loaded".to_string(),
        })
    }
}
