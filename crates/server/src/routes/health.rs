use crate::{dtos::common::HealthResponse, error::{ApiError, ErrorResponse}, state::AppState};
use axum::{Json, extract::State};
use chrono::Utc;

/// Liveness plus storage reachability. Unlike every other endpoint, a failure
/// here reports the underlying database error to the caller.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = ErrorResponse)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state
        .db
        .ping()
        .await
        .map_err(|err| ApiError::Unavailable(err.to_string()))?;

    Ok(Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
