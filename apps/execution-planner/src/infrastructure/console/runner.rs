//! Console read-eval-print loop.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::application::dto::PlanRequestDto;
use crate::application::ports::SnapshotProviderPort;
use crate::application::use_cases::PlanExecutionUseCase;

use super::command_parser::{CommandError, CommandParser, ConsoleCommand};
use super::presenter::PlanPresenter;

/// Drives the interactive shell over any line reader and writer.
pub struct ConsoleRunner<S>
where
    S: SnapshotProviderPort,
{
    plan_execution: Arc<PlanExecutionUseCase<S>>,
    parser: CommandParser,
    venue_count: usize,
}

impl<S> ConsoleRunner<S>
where
    S: SnapshotProviderPort,
{
    /// Create a runner for a snapshot of `venue_count` venues.
    pub const fn new(plan_execution: Arc<PlanExecutionUseCase<S>>, venue_count: usize) -> Self {
        Self {
            plan_execution,
            parser: CommandParser::new(),
            venue_count,
        }
    }

    /// Run until `exit`, a blank line or end of input.
    ///
    /// Command and planning errors are printed and the loop continues.
    pub async fn run<R, W>(&self, mut input: R, output: W) -> io::Result<W>
    where
        R: BufRead,
        W: Write,
    {
        let mut presenter = PlanPresenter::new(output);
        presenter.welcome(self.venue_count)?;

        let mut line = String::new();
        loop {
            presenter.prompt()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match self.parser.parse(&line) {
                Ok(ConsoleCommand::Exit) | Err(CommandError::Empty) => break,
                Ok(ConsoleCommand::Execute { side, amount }) => {
                    presenter.attempt(side, amount)?;
                    match self
                        .plan_execution
                        .execute(PlanRequestDto { side, amount })
                        .await
                    {
                        Ok(plan) => presenter.plan(&plan)?,
                        Err(e) => presenter.error(&e.to_string())?,
                    }
                }
                Err(e) => presenter.error(&e.to_string())?,
            }
        }

        presenter.goodbye()?;
        Ok(presenter.into_inner())
    }
}
