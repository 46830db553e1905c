//! Execution Planning Errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::shared::OrderSide;

/// Errors that can occur while planning an execution.
///
/// Callers should branch on the variant, never on the message text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// The request could not be understood (rejected before planning).
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Error details.
        message: String,
    },

    /// Combined, balance-constrained liquidity is below the requested quantity.
    #[error(
        "Not enough liquidity or {} balance to fulfill the {} order: requested {requested}, unfilled {unfilled}",
        balance_name(.side),
        side_name(.side)
    )]
    InsufficientLiquidity {
        /// Side of the failed order.
        side: OrderSide,
        /// Quantity that was requested.
        requested: Decimal,
        /// Quantity left over when every usable level was consumed.
        unfilled: Decimal,
    },
}

impl PlanningError {
    /// Build an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "INVALID_REQUEST",
            Self::InsufficientLiquidity { .. } => "INSUFFICIENT_LIQUIDITY",
        }
    }
}

const fn balance_name(side: &OrderSide) -> &'static str {
    match side {
        OrderSide::Buy => "quote",
        OrderSide::Sell => "base",
    }
}

const fn side_name(side: &OrderSide) -> &'static str {
    match side {
        OrderSide::Buy => "buy",
        OrderSide::Sell => "sell",
    }
}
