//! Console output.

use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::application::dto::PlanResponseDto;
use crate::domain::shared::OrderSide;

/// Renders console messages and plans into a writer.
#[derive(Debug)]
pub struct PlanPresenter<W> {
    out: W,
}

impl<W: Write> PlanPresenter<W> {
    /// Create a presenter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Greeting shown once the snapshot is loaded.
    pub fn welcome(&mut self, venue_count: usize) -> io::Result<()> {
        writeln!(self.out, "Successfully loaded data for {venue_count} venues.")?;
        writeln!(self.out)?;
        writeln!(self.out, "Welcome to the execution planner console.")?;
        writeln!(
            self.out,
            "Enter a command in the format '[buy|sell] [amount]' (e.g., 'buy 10,5')."
        )?;
        writeln!(self.out, "Type 'exit' to quit the application.")?;
        writeln!(self.out)
    }

    /// Input prompt.
    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    /// Echo of the command about to be planned.
    pub fn attempt(&mut self, side: OrderSide, amount: Decimal) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Attempting to {side} {amount}...")
    }

    /// The fills of a plan followed by its summary.
    pub fn plan(&mut self, plan: &PlanResponseDto) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- Optimal Execution Plan Found ---")?;

        for fill in &plan.fills {
            writeln!(
                self.out,
                "  - {} {:.8} on {} at {} per unit",
                fill.side,
                fill.quantity,
                fill.venue,
                fill.price.normalize()
            )?;
        }

        self.summary(plan)
    }

    /// An error line.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        writeln!(self.out)
    }

    /// Farewell line.
    pub fn goodbye(&mut self) -> io::Result<()> {
        writeln!(self.out, "Exiting application. Goodbye!")
    }

    fn summary(&mut self, plan: &PlanResponseDto) -> io::Result<()> {
        let Some(average) = plan.average_price else {
            return writeln!(self.out, "Nothing to execute.");
        };

        let total_label = match plan.side {
            OrderSide::Buy => "Total Cost",
            OrderSide::Sell => "Total Revenue",
        };

        writeln!(self.out)?;
        writeln!(self.out, "--- Summary ---")?;
        writeln!(self.out, "Total quantity to {}: {:.8}", plan.side, plan.total_quantity)?;
        writeln!(self.out, "{total_label}: {}", plan.total_notional.normalize())?;
        writeln!(
            self.out,
            "Effective Price: {} per unit",
            average.round_dp(8).normalize()
        )?;
        writeln!(self.out)
    }
}
