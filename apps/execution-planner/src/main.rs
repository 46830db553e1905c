//! Execution Planner Binary
//!
//! Loads an order-book snapshot and plans executions against it, either over
//! HTTP or from an interactive console.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin execution-planner -- console
//! cargo run --bin execution-planner -- --config config.yaml serve
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)
//! - Any `${VAR}` referenced from the configuration file

mod cli;

use std::io::{self, Write};
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use execution_planner::config::{Config, load_config_or_default};
use execution_planner::infrastructure::console::ConsoleRunner;
use execution_planner::infrastructure::http::{AppState, create_router};
use execution_planner::infrastructure::snapshot::SnapshotLoader;
use execution_planner::telemetry::init_tracing;
use execution_planner::{ExecutionPlanner, InMemorySnapshotProvider, PlanExecutionUseCase};
use tokio::net::TcpListener;
use tokio::signal;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, found) = load_config_or_default(cli.config.as_deref())?;
    init_tracing(&config.observability.logging)?;

    if !found {
        tracing::warn!(
            path = cli.config.as_deref().unwrap_or("config.yaml"),
            "Config file not found, using defaults"
        );
    }

    tracing::info!("Starting Execution Planner");
    log_config(&config);

    let snapshot_path = cli.snapshot.unwrap_or_else(|| config.snapshot.path.clone());
    let snapshot = SnapshotLoader::from_config(&config.snapshot)
        .load(&snapshot_path)
        .with_context(|| format!("Failed to load order books from '{snapshot_path}'"))?;
    let venue_count = snapshot.len();

    let snapshots = Arc::new(InMemorySnapshotProvider::new(snapshot));
    let plan_execution = Arc::new(PlanExecutionUseCase::new(
        Arc::clone(&snapshots),
        ExecutionPlanner::new(config.planner.min_tradable_unit),
    ));

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Serve => {
            let state = AppState {
                plan_execution,
                snapshots,
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            serve(&config, state).await?;
        }
        Commands::Console => {
            let runner = ConsoleRunner::new(plan_execution, venue_count);
            let mut stdout = runner.run(io::stdin().lock(), io::stdout().lock()).await?;
            stdout.flush()?;
        }
    }

    tracing::info!("Execution Planner stopped");
    Ok(())
}

/// Log the loaded configuration.
fn log_config(config: &Config) {
    tracing::info!(
        http_port = config.server.http_port,
        snapshot = %config.snapshot.path,
        quote_balance = %config.snapshot.quote_balance,
        base_balance = %config.snapshot.base_balance,
        min_tradable_unit = %config.planner.min_tradable_unit,
        "Configuration loaded"
    );
}

/// Run the HTTP server until a shutdown signal arrives.
async fn serve(
    config: &Config,
    state: AppState<InMemorySnapshotProvider>,
) -> anyhow::Result<()> {
    let app = create_router(state);

    let http_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.http_port)
            .parse()
            .context("Invalid server bind address")?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/execute");

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
