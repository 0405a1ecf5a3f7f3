use crate::{
    dtos::{
        common::{PaginationMeta, SearchQueryParams},
        course::{CourseDetailData, CourseDetailResponse, CourseResponse, CourseSearchResponse},
    },
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use database::services::course::CourseService;

/// Paginated course search across code, code description and description
#[utoipa::path(
    get,
    path = "/api/v1/sced/search",
    params(SearchQueryParams),
    responses(
        (status = 200, description = "Matching courses with pagination metadata", body = CourseSearchResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<CourseSearchResponse>, ApiError> {
    let (page, limit) = (params.page(), params.limit());
    let (courses, total) =
        CourseService::search_paginated(&state.db, params.search.trim(), page, limit).await?;

    Ok(Json(CourseSearchResponse {
        success: true,
        data: courses.into_iter().map(CourseResponse::from).collect(),
        pagination: PaginationMeta::new(page, limit, total),
    }))
}

/// Single course by SCED code, with its certification areas attached
#[utoipa::path(
    get,
    path = "/api/v1/sced/courses/code/{code}",
    params(
        ("code" = String, Path, description = "SCED course code")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDetailResponse),
        (status = 404, description = "No course with that code", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_course_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CourseDetailResponse>, ApiError> {
    let (course, certifications) = CourseService::get_by_code(&state.db, &code)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("course not found: {code}")))?;

    Ok(Json(CourseDetailResponse {
        success: true,
        data: CourseDetailData {
            course: course.into(),
            certifications,
        },
    }))
}
