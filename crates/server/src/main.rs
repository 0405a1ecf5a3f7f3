use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use crate::{
    doc::ApiDoc,
    routes::{admin, certification, course, health, setup},
    state::AppState,
};

#[tokio::main]
async fn main() {
    env_logger::init();
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    let db = database::db::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    let state = AppState { db };

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/api/v1/sced/search", get(course::search_courses))
        .route(
            "/api/v1/sced/courses/code/{code}",
            get(course::get_course_by_code),
        )
        .route(
            "/api/v1/certifications/search",
            get(certification::search_certifications),
        )
        .route(
            "/api/v1/certifications/name/{name}/cte-courses",
            get(certification::cte_courses_by_certification),
        )
        .route(
            "/api/v1/admin/upload-csv",
            post(admin::upload_csv).layer(DefaultBodyLimit::max(admin::MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/admin/stats", get(admin::stats))
        .route("/api/v1/setup", post(setup::setup))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(routes::fallback)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .expect("Server error");
}
