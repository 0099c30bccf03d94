//! HTTP route handlers for the bartender API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::{ServeDir, ServeFile};

use crate::bartender::Answer;
use crate::error::BartenderError;

use super::state::AppState;

/// Landing page file inside the static directory.
const LANDING_PAGE: &str = "front.html";

/// Reply sent for every failure other than "not found".
const GENERIC_FAILURE: &str = "Something went wrong while mixing your answer.";

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join(LANDING_PAGE)))
        .route("/health", get(health_check))
        .route("/ask", post(ask))
        .nest_service("/templates", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "bartender-agent",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Drink question request.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The user's question, e.g. "How do I make a Margarita?".
    pub message: String,
    /// Optional ingredient to list drinks for instead.
    #[serde(default)]
    pub ingredient: Option<String>,
}

/// Drink question response.
#[derive(Debug, Deserialize, Serialize)]
pub struct AskResponse {
    /// Reply text.
    pub response: String,
}

/// Handle drink questions.
async fn ask(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Result<(StatusCode, Json<AskResponse>), ApiError> {
    let answer = state
        .bartender
        .answer(&request.message, request.ingredient.as_deref())
        .await?;

    let (status, response) = match answer {
        Answer::Found(text) => (StatusCode::OK, text),
        Answer::NotFound(text) => (StatusCode::NOT_FOUND, text),
    };

    Ok((status, Json(AskResponse { response })))
}

/// Failure while answering; rendered as a generic 500.
#[derive(Debug)]
pub struct ApiError(BartenderError);

impl From<BartenderError> for ApiError {
    fn from(err: BartenderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_upstream() {
            tracing::error!("Upstream service failed: {}", self.0);
        } else {
            tracing::error!("Failed to answer question: {}", self.0);
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(AskResponse {
                response: GENERIC_FAILURE.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use super::*;
    use crate::bartender::Bartender;
    use crate::bartender::testing::{CallLog, fakes};
    use crate::config::BartenderConfig;

    fn app(fail_chat: bool) -> (Router, CallLog) {
        let (recipes, chat, log) = fakes(fail_chat);
        let config = BartenderConfig::new()
            .with_api_key("sk-test")
            .with_static_dir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"));
        let bartender = Bartender::new(recipes, chat).unwrap();
        (create_router(AppState::with_bartender(config, bartender)), log)
    }

    async fn post_ask(app: Router, body: serde_json::Value) -> (StatusCode, AskResponse) {
        let request = Request::builder()
            .method("POST")
            .uri("/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ask_by_name() {
        let (app, log) = app(false);
        let (status, body) =
            post_ask(app, serde_json::json!({"message": "How do I make a Margarita?"})).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.response.is_empty());
        assert!(body.response.contains("Margarita"));
        assert_eq!(*log.lock().unwrap(), ["name:a margarita", "chat:4"]);
    }

    #[tokio::test]
    async fn test_ask_unknown_drink() {
        let (app, log) = app(false);
        let (status, body) =
            post_ask(app, serde_json::json!({"message": "zzzznotadrink"})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.response.contains("zzzznotadrink"));
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ask_by_ingredient() {
        let (app, log) = app(false);
        let (status, body) = post_ask(
            app,
            serde_json::json!({"message": "what can I make?", "ingredient": "vodka"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.response,
            "Here are drinks that use vodka: Screwdriver, Black Russian"
        );
        assert!(!log.lock().unwrap().iter().any(|call| call.starts_with("chat")));
    }

    #[tokio::test]
    async fn test_ask_unknown_ingredient() {
        let (app, _) = app(false);
        let (status, body) = post_ask(
            app,
            serde_json::json!({"message": "", "ingredient": "zzzznotaningredient"}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.response.contains("zzzznotaningredient"));
    }

    #[tokio::test]
    async fn test_ask_failures_are_generic() {
        let (app, _) = app(true);
        let (status, body) =
            post_ask(app.clone(), serde_json::json!({"message": "margarita"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.response, GENERIC_FAILURE);

        let (status, body) = post_ask(app, serde_json::json!({"message": "nameless"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.response, GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_health_and_landing_page() {
        let (app, _) = app(false);

        let health = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let landing = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(landing.status(), StatusCode::OK);
        let html = to_bytes(landing.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&html).contains("ask-form"));

        let script = app
            .oneshot(Request::builder().uri("/templates/script.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(script.status(), StatusCode::OK);
    }
}
