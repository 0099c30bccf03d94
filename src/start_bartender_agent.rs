//! Startup helpers for the bartender agent server.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use crate::config::BartenderConfig;
use crate::server::{self, AppState};

/// Run the server until Ctrl+C.
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Bartender Agent v{}", env!("CARGO_PKG_VERSION"));

    let state = match initialize() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to create state: {e:#}");
            return ExitCode::from(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(server::run_server_with_shutdown(state, shutdown_signal())) {
        tracing::error!("Server error: {e}");
        return ExitCode::from(1);
    }

    tracing::info!("Bartender Agent stopped");
    ExitCode::SUCCESS
}

/// Load the configuration and build the application state without starting the server.
///
/// # Errors
/// Returns an error if the configuration is invalid or state creation fails.
pub fn initialize() -> anyhow::Result<Arc<AppState>> {
    let config = BartenderConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        recipes = %config.cocktaildb_base_url,
        chat = %config.chat_base_url,
        model = %config.model,
        "Outbound endpoints"
    );

    AppState::new(config).context("failed to build application state")
}

/// Resolve when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Ctrl+C handler failed: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
