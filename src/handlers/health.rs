use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The dictionary lives in process memory, so the service is healthy whenever
/// it can answer. Reports the number of stored words.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let entries = state.dictionary.len();
    tracing::debug!("Health check passed ({} entries)", entries);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            entries,
        }),
    )
}
