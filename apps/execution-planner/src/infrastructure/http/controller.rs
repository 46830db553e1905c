//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the plan execution use case.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::application::ports::SnapshotProviderPort;
use crate::application::use_cases::{PlanExecutionError, PlanExecutionUseCase};

use super::request::ExecuteRequest;
use super::response::{ErrorResponse, HealthResponse};

/// Application state shared across handlers.
pub struct AppState<S>
where
    S: SnapshotProviderPort,
{
    /// Use case for planning executions.
    pub plan_execution: Arc<PlanExecutionUseCase<S>>,
    /// Snapshot provider, for health reporting.
    pub snapshots: Arc<S>,
    /// Application version.
    pub version: String,
}

impl<S> Clone for AppState<S>
where
    S: SnapshotProviderPort,
{
    fn clone(&self) -> Self {
        Self {
            plan_execution: Arc::clone(&self.plan_execution),
            snapshots: Arc::clone(&self.snapshots),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: SnapshotProviderPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/execute", post(execute))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: SnapshotProviderPort,
{
    let venues = state
        .snapshots
        .current_snapshot()
        .await
        .ok()
        .map(|snapshot| snapshot.len());

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        venues,
    })
}

/// Plan execution endpoint.
async fn execute<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<ExecuteRequest>,
) -> Response
where
    S: SnapshotProviderPort,
{
    match state.plan_execution.execute(request.into()).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(PlanExecutionError::Planning(e)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.code(), e.to_string())),
        )
            .into_response(),
        Err(PlanExecutionError::Snapshot(e)) => {
            tracing::error!(error = %e, "No snapshot to plan against");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new("SNAPSHOT_UNAVAILABLE", e.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::InMemorySnapshotProvider;
    use crate::domain::execution_planning::ExecutionPlanner;
    use crate::domain::market::{MarketSnapshot, OrderBook, OrderLevel, Venue};
    use crate::infrastructure::http::ExecuteResponse;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn create_test_state(provider: InMemorySnapshotProvider) -> AppState<InMemorySnapshotProvider> {
        let snapshots = Arc::new(provider);
        let plan_execution = Arc::new(PlanExecutionUseCase::new(
            Arc::clone(&snapshots),
            ExecutionPlanner::default(),
        ));

        AppState {
            plan_execution,
            snapshots,
            version: "1.0.0-test".to_string(),
        }
    }

    fn two_venue_provider() -> InMemorySnapshotProvider {
        InMemorySnapshotProvider::new(MarketSnapshot::new(vec![
            Venue::new(
                "Exchange1",
                OrderBook::new(
                    vec![OrderLevel::new(dec!(3000), dec!(1))],
                    vec![OrderLevel::new(dec!(2990), dec!(1))],
                ),
                dec!(100000),
                dec!(100),
            ),
            Venue::new(
                "Exchange2",
                OrderBook::new(
                    vec![OrderLevel::new(dec!(3010), dec!(2))],
                    vec![OrderLevel::new(dec!(2995), dec!(2))],
                ),
                dec!(100000),
                dec!(100),
            ),
        ]))
    }

    fn post_execute(body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/execute")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let app = create_router(create_test_state(two_venue_provider()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = read_body(response).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.venues, Some(2));
    }

    #[tokio::test]
    async fn health_check_without_snapshot_omits_venues() {
        let app = create_router(create_test_state(InMemorySnapshotProvider::empty()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = read_body(response).await;
        assert_eq!(health.venues, None);
    }

    #[tokio::test]
    async fn execute_buy_returns_plan() {
        let app = create_router(create_test_state(two_venue_provider()));

        let response = app
            .oneshot(post_execute(&serde_json::json!({
                "side": "buy",
                "amount": "2"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let plan: ExecuteResponse = read_body(response).await;
        assert_eq!(plan.fills.len(), 2);
        assert_eq!(plan.fills[0].venue, "Exchange1");
        assert_eq!(plan.fills[0].quantity, dec!(1));
        assert_eq!(plan.fills[1].venue, "Exchange2");
        assert_eq!(plan.fills[1].quantity, dec!(1));
        assert_eq!(plan.total_notional, dec!(6010));
        assert_eq!(plan.average_price, Some(dec!(3005)));
    }

    #[tokio::test]
    async fn execute_sell_with_numeric_amount() {
        let app = create_router(create_test_state(two_venue_provider()));

        let response = app
            .oneshot(post_execute(&serde_json::json!({
                "side": "sell",
                "amount": 1
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let plan: ExecuteResponse = read_body(response).await;
        assert_eq!(plan.fills.len(), 1);
        assert_eq!(plan.fills[0].venue, "Exchange2");
        assert_eq!(plan.fills[0].price, dec!(2995));
    }

    #[tokio::test]
    async fn execute_insufficient_liquidity_is_bad_request() {
        let app = create_router(create_test_state(two_venue_provider()));

        let response = app
            .oneshot(post_execute(&serde_json::json!({
                "side": "buy",
                "amount": "10"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = read_body(response).await;
        assert_eq!(error.code, "INSUFFICIENT_LIQUIDITY");
        assert!(error.message.contains("quote balance"));
    }

    #[tokio::test]
    async fn execute_amount_too_small_is_bad_request() {
        let app = create_router(create_test_state(two_venue_provider()));

        let response = app
            .oneshot(post_execute(&serde_json::json!({
                "side": "sell",
                "amount": "0.000000001"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = read_body(response).await;
        assert_eq!(error.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn execute_without_snapshot_is_unavailable() {
        let app = create_router(create_test_state(InMemorySnapshotProvider::empty()));

        let response = app
            .oneshot(post_execute(&serde_json::json!({
                "side": "buy",
                "amount": "1"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let error: ErrorResponse = read_body(response).await;
        assert_eq!(error.code, "SNAPSHOT_UNAVAILABLE");
    }

    #[tokio::test]
    async fn execute_unknown_side_is_rejected() {
        let app = create_router(create_test_state(two_venue_provider()));

        let response = app
            .oneshot(post_execute(&serde_json::json!({
                "side": "hold",
                "amount": "1"
            })))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
