use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::models::adoption_request::MessageBody;
use crate::state::AppState;

mod adoption;
mod docs;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_live))
        .route("/health/ready", get(health_ready))
        .merge(adoption::router())
        .merge(docs::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_live(State(state): State<AppState>) -> Result<Json<HealthResponse>, HttpError> {
    let response = HealthResponse {
        status: "live",
        uptime_seconds: state.start_time.elapsed().as_secs(),
    };
    Ok(Json(response))
}

async fn health_ready(State(state): State<AppState>) -> Result<Json<ReadyResponse>, HttpError> {
    state.store.ping().await.map_err(|err| {
        error!("Readiness check failed: {err}");
        HttpError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Database unavailable".to_string(),
        )
    })?;

    Ok(Json(ReadyResponse { status: "ready" }))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
struct ReadyResponse {
    status: &'static str,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: String) -> Self {
        assert!(!status.is_success(), "Error status cannot be 2xx");
        assert!(!message.is_empty(), "Error message cannot be empty");
        Self { status, message }
    }

    /// Generic 500. The cause must be logged by the caller; it never reaches
    /// the client.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR_MESSAGE.to_string(),
        )
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        info!("HTTP error: {}", self.message);
        let body = Json(MessageBody {
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
