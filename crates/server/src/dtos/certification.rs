use super::common::PaginationMeta;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificationAreaResponse {
    pub certification_area_code: String,
    pub certification_area_description: String,
    /// Constant placeholder; the upstream contract carries the field without
    /// computing it.
    // TODO: replace with a per-area count of mapped courses
    pub course_count: u64,
}

impl CertificationAreaResponse {
    pub fn new(code: String, description: String) -> Self {
        Self {
            certification_area_code: code,
            certification_area_description: description,
            course_count: 0,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CertificationSearchResponse {
    pub success: bool,
    pub data: Vec<CertificationAreaResponse>,
    pub pagination: PaginationMeta,
}
