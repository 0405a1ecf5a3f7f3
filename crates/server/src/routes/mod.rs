pub mod admin;
pub mod certification;
pub mod course;
pub mod health;
pub mod setup;

use crate::error::ApiError;

/// Uniform 404 envelope for any unmatched path or method
pub async fn fallback() -> ApiError {
    ApiError::NotFound("route not found".to_string())
}
