use crate::{
    dtos::admin::{SetupData, SetupResponse},
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::seed::SeedService;
use migration::{Migrator, MigratorTrait};

/// Creates the schema, applies the unique-mapping constraint and inserts the
/// seed rows. Safe to call repeatedly; reruns write nothing new.
#[utoipa::path(
    post,
    path = "/api/v1/setup",
    responses(
        (status = 200, description = "Schema and seed data in place", body = SetupResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn setup(State(state): State<AppState>) -> Result<Json<SetupResponse>, ApiError> {
    Migrator::up(&state.db, None).await?;

    let (seeded_courses, seeded_mappings) = SeedService::seed(&state.db).await?;

    Ok(Json(SetupResponse {
        success: true,
        data: SetupData {
            seeded_courses,
            seeded_mappings,
        },
    }))
}
