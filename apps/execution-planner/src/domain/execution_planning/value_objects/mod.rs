//! Execution Planning Value Objects

mod execution_plan;
mod fill;

pub use execution_plan::ExecutionPlan;
pub use fill::Fill;
