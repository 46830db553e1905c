//! Console command parsing.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::shared::OrderSide;

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Plan an execution.
    Execute {
        /// Order side.
        side: OrderSide,
        /// Base quantity.
        amount: Decimal,
    },
    /// Leave the shell.
    Exit,
}

/// Errors for input that is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Nothing was typed.
    #[error("Input cannot be empty.")]
    Empty,

    /// Wrong number of words.
    #[error("Invalid command format. Please use: [buy|sell] [amount]")]
    Format,

    /// First word is neither `buy` nor `sell`.
    #[error("Invalid order side '{0}'. Please use 'buy' or 'sell'.")]
    InvalidSide(String),

    /// Second word is not a positive number.
    #[error("Invalid amount '{0}'. Please provide a positive number.")]
    InvalidAmount(String),
}

/// Parses one line of console input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser;

impl CommandParser {
    /// Create a new parser.
    pub const fn new() -> Self {
        Self
    }

    /// Parse `[buy|sell] [amount]` or `exit`.
    ///
    /// The side is case-insensitive and the amount accepts either `.` or `,`
    /// as decimal separator.
    pub fn parse(&self, line: &str) -> Result<ConsoleCommand, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }
        if line.eq_ignore_ascii_case("exit") {
            return Ok(ConsoleCommand::Exit);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let [side, amount] = parts.as_slice() else {
            return Err(CommandError::Format);
        };

        let side = OrderSide::from_str(side)
            .map_err(|_| CommandError::InvalidSide((*side).to_string()))?;
        let amount = parse_amount(amount)?;

        Ok(ConsoleCommand::Execute { side, amount })
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, CommandError> {
    let invalid = || CommandError::InvalidAmount(raw.to_string());

    // One separator at most, either style
    if raw.matches(['.', ',']).count() > 1 {
        return Err(invalid());
    }

    let amount = Decimal::from_str(&raw.replace(',', ".")).map_err(|_| invalid())?;
    if amount <= Decimal::ZERO {
        return Err(invalid());
    }
    Ok(amount)
}
