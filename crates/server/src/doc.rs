use crate::routes::{admin, certification, course, health, setup};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        course::search_courses,
        course::get_course_by_code,
        certification::search_certifications,
        certification::cte_courses_by_certification,
        admin::upload_csv,
        admin::stats,
        setup::setup
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Courses", description = "SCED course search and lookup"),
        (name = "Certifications", description = "Certification-area endpoints"),
        (name = "Admin", description = "Bulk import, stats and setup"),
    ),
    info(
        title = "SCED Course API",
        version = "1.0.0",
        description = "SCED course codes and certification-area mappings",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
