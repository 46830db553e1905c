//! Execution Planning Domain Services

mod planner;
mod planning_context;

pub use planner::ExecutionPlanner;
