use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// GET /health handler - Health check endpoint
///
/// Runs `SELECT 1` against the store: 200 when it answers, 503 otherwise.
/// The underlying error is logged, never returned.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Response {
    if let Err(e) = state.store.health_check().await {
        tracing::error!("Health check failed: {:#}", e);
        let body = UnhealthyResponse {
            status: "unhealthy".to_string(),
            error: "Database unavailable".to_string(),
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response();
    }

    let body = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(body)).into_response()
}
