//! Application Ports
//!
//! Ports define interfaces for interacting with external systems.

mod snapshot_provider_port;

pub use snapshot_provider_port::{InMemorySnapshotProvider, SnapshotError, SnapshotProviderPort};
