// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Execution Planner - Rust Core Library
//!
//! Plans the cheapest buy or most profitable sell of a quantity of a base
//! asset across several venues, each with its own order book and balances.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `shared`: Order side, venue ids, smallest tradable unit
//!   - `market`: Order levels, books, venues, immutable snapshots
//!   - `execution_planning`: Fills, plans, the greedy best-price planner
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `SnapshotProviderPort` and its in-memory implementation
//!   - `use_cases`: `PlanExecution`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters
//!   - `snapshot`: Line-delimited order-book file loader
//!   - `http`: Axum REST API
//!   - `console`: Interactive text shell

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration.
pub mod config;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::execution_planning::{ExecutionPlan, ExecutionPlanner, Fill, PlanningError};
pub use domain::market::{MarketSnapshot, OrderBook, OrderLevel, Venue};
pub use domain::shared::{MIN_TRADABLE_UNIT, OrderSide, VenueId};

// Application re-exports
pub use application::dto::{FillDto, PlanRequestDto, PlanResponseDto};
pub use application::ports::{InMemorySnapshotProvider, SnapshotError, SnapshotProviderPort};
pub use application::use_cases::{PlanExecutionError, PlanExecutionUseCase};

// Infrastructure re-exports
pub use infrastructure::console::ConsoleRunner;
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::snapshot::SnapshotLoader;
