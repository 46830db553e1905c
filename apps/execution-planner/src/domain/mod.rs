//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`market`]: Venues, their order books and balances (the market snapshot)
//! - [`execution_planning`]: Best-execution planning across venues

pub mod execution_planning;
pub mod market;
pub mod shared;
