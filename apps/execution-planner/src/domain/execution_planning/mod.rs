//! Execution Planning Bounded Context
//!
//! Computes the cheapest (buy) or most profitable (sell) sequence of partial
//! fills across venues for a target quantity.
//!
//! # Key Concepts
//!
//! - **Fill**: One planned slice against one level at one venue
//! - **Execution Plan**: The ordered fills plus their volume-weighted price
//! - **Execution Planner**: Greedy best-price merge over every venue's book,
//!   bounded by each venue's own balance

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::PlanningError;
pub use services::ExecutionPlanner;
pub use value_objects::{ExecutionPlan, Fill};

pub use crate::domain::shared::OrderSide;
