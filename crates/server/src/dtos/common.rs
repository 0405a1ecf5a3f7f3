use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SearchQueryParams {
    #[serde(default)]
    pub search: String,

    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl SearchQueryParams {
    /// Pages are 1-based; zero is clamped up rather than rejected
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.max(1)
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginationMeta::new(1, 20, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(1, 20, 20).total_pages, 1);
        assert_eq!(PaginationMeta::new(1, 20, 21).total_pages, 2);
        assert_eq!(PaginationMeta::new(1, 7, 15).total_pages, 3);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let meta = serde_json::to_value(PaginationMeta::new(2, 10, 35)).unwrap();
        assert_eq!(
            meta,
            serde_json::json!({
                "page": 2,
                "limit": 10,
                "total": 35,
                "totalPages": 4
            })
        );
    }

    #[test]
    fn test_query_params_clamp_to_one() {
        let params = SearchQueryParams {
            search: String::new(),
            page: 0,
            limit: 0,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 1);
    }
}
