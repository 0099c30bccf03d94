//! HTTP server for the bartender agent.
//!
//! Provides:
//! - `POST /ask` drink questions
//! - `GET /` landing page and `/templates/*` assets
//! - `GET /health`

pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Start the HTTP server with graceful shutdown support.
///
/// The server will stop accepting new connections when `shutdown_signal` completes.
///
/// # Errors
/// Returns an error if the server fails to start.
pub async fn run_server_with_shutdown<F>(
    state: Arc<AppState>,
    shutdown_signal: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));

    let app: Router = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Bartender Agent server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bartender::Bartender;
    use crate::bartender::testing::fakes;
    use crate::config::BartenderConfig;

    #[tokio::test]
    async fn test_server_stops_on_shutdown_signal() {
        let (recipes, chat, log) = fakes(false);
        let mut config = BartenderConfig::new().with_api_key("sk-test");
        config.port = 0;
        let state = AppState::with_bartender(config, Bartender::new(recipes, chat).unwrap());

        let served = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            run_server_with_shutdown(state, std::future::ready(())),
        )
        .await
        .unwrap();

        assert!(served.is_ok());
        assert!(log.lock().unwrap().is_empty());
    }
}
