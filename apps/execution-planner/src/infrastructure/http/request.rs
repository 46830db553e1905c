//! HTTP request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::dto::PlanRequestDto;
use crate::domain::shared::OrderSide;

/// Request to plan the execution of an order.
///
/// `amount` accepts either a JSON number or a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequest {
    /// `buy` or `sell`.
    pub side: OrderSide,
    /// Base quantity.
    pub amount: Decimal,
}

impl From<ExecuteRequest> for PlanRequestDto {
    fn from(request: ExecuteRequest) -> Self {
        Self {
            side: request.side,
            amount: request.amount,
        }
    }
}
