//! Plan Execution Use Case
//!
//! Shared by every request shell (HTTP, console): validates the requested
//! amount, captures the current snapshot and runs the planner on it.

use std::sync::Arc;

use thiserror::Error;

use crate::application::dto::{PlanRequestDto, PlanResponseDto};
use crate::application::ports::{SnapshotError, SnapshotProviderPort};
use crate::domain::execution_planning::{ExecutionPlanner, PlanningError};

/// Errors surfaced by [`PlanExecutionUseCase`].
#[derive(Debug, Error)]
pub enum PlanExecutionError {
    /// The request was rejected or the plan is infeasible.
    #[error(transparent)]
    Planning(#[from] PlanningError),

    /// No snapshot could be obtained.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Use case for planning a best execution.
pub struct PlanExecutionUseCase<S>
where
    S: SnapshotProviderPort,
{
    snapshots: Arc<S>,
    planner: ExecutionPlanner,
}

impl<S> PlanExecutionUseCase<S>
where
    S: SnapshotProviderPort,
{
    /// Create a new PlanExecutionUseCase.
    pub const fn new(snapshots: Arc<S>, planner: ExecutionPlanner) -> Self {
        Self { snapshots, planner }
    }

    /// The planner this use case runs.
    pub const fn planner(&self) -> &ExecutionPlanner {
        &self.planner
    }

    /// Execute the use case.
    pub async fn execute(
        &self,
        request: PlanRequestDto,
    ) -> Result<PlanResponseDto, PlanExecutionError> {
        // 1. Reject amounts that cannot be traded at all
        let min = self.planner.min_tradable_unit();
        if request.amount < min {
            return Err(PlanningError::invalid_request(format!(
                "Order amount is too small. It must be at least {min}"
            ))
            .into());
        }

        // 2. Capture the snapshot once for the whole call
        let snapshot = self.snapshots.current_snapshot().await?;

        // 3. Plan
        let plan_id = uuid::Uuid::new_v4().to_string();
        match self
            .planner
            .plan(snapshot.venues(), request.side, request.amount)
        {
            Ok(plan) => {
                tracing::info!(
                    plan_id = %plan_id,
                    side = %request.side,
                    amount = %request.amount,
                    fills = plan.fills().len(),
                    average_price = ?plan.average_price(),
                    "Execution plan computed"
                );
                Ok(PlanResponseDto::from_plan(plan_id, plan))
            }
            Err(e) => {
                tracing::warn!(
                    plan_id = %plan_id,
                    side = %request.side,
                    amount = %request.amount,
                    venues = snapshot.len(),
                    error = %e,
                    "Execution plan rejected"
                );
                Err(e.into())
            }
        }
    }
}
