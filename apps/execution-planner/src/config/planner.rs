//! Planner configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::MIN_TRADABLE_UNIT;

/// Planner tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Quantities below this are treated as noise.
    #[serde(default = "default_min_tradable_unit")]
    pub min_tradable_unit: Decimal,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_tradable_unit: default_min_tradable_unit(),
        }
    }
}

const fn default_min_tradable_unit() -> Decimal {
    MIN_TRADABLE_UNIT
}
