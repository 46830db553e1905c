//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod plan_execution;

pub use plan_execution::{PlanExecutionError, PlanExecutionUseCase};
