//! Interactive console adapter.
//!
//! Reads `[buy|sell] [amount]` commands line by line and prints the plan
//! produced by the same use case the HTTP adapter serves.

mod command_parser;
mod presenter;
mod runner;

pub use command_parser::{CommandError, CommandParser, ConsoleCommand};
pub use presenter::PlanPresenter;
pub use runner::ConsoleRunner;
