use crate::{
    dtos::{
        certification::{CertificationAreaResponse, CertificationSearchResponse},
        common::{PaginationMeta, SearchQueryParams},
        course::{CourseResponse, CourseSearchResponse},
    },
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use database::services::{certification::CertificationService, course::CourseService};

/// Distinct certification areas filtered by a description substring. A `*`
/// search term means no filter.
#[utoipa::path(
    get,
    path = "/api/v1/certifications/search",
    params(SearchQueryParams),
    responses(
        (status = 200, description = "Matching certification areas", body = CertificationSearchResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Certifications"
)]
pub async fn search_certifications(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<CertificationSearchResponse>, ApiError> {
    let (page, limit) = (params.page(), params.limit());
    let (areas, total) =
        CertificationService::search_areas_paginated(&state.db, params.search.trim(), page, limit)
            .await?;

    Ok(Json(CertificationSearchResponse {
        success: true,
        data: areas
            .into_iter()
            .map(|(code, description)| CertificationAreaResponse::new(code, description))
            .collect(),
        pagination: PaginationMeta::new(page, limit, total),
    }))
}

/// CTE courses mapped to an exact certification-area name. The path segment
/// is URL-decoded before matching.
#[utoipa::path(
    get,
    path = "/api/v1/certifications/name/{name}/cte-courses",
    params(
        ("name" = String, Path, description = "Exact certification-area description"),
        SearchQueryParams
    ),
    responses(
        (status = 200, description = "CTE courses for the certification area", body = CourseSearchResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Certifications"
)]
pub async fn cte_courses_by_certification(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<CourseSearchResponse>, ApiError> {
    let (page, limit) = (params.page(), params.limit());
    let (courses, total) =
        CourseService::cte_courses_by_certification(&state.db, &name, page, limit).await?;

    Ok(Json(CourseSearchResponse {
        success: true,
        data: courses.into_iter().map(CourseResponse::from).collect(),
        pagination: PaginationMeta::new(page, limit, total),
    }))
}
