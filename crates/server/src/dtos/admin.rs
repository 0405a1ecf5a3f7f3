use database::services::stats::AggregateStats;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadCsvResponse {
    pub success: bool,
    pub data: UploadCsvData,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadCsvData {
    /// Which table the file was detected as feeding
    pub table: String,
    /// Rows actually written; skipped and duplicate rows are not counted
    pub inserted: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub success: bool,
    pub data: StatsData,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub total_courses: u64,
    pub total_certifications: u64,
    pub total_mappings: u64,
}

impl From<AggregateStats> for StatsData {
    fn from(stats: AggregateStats) -> Self {
        Self {
            total_courses: stats.total_courses,
            total_certifications: stats.total_certifications,
            total_mappings: stats.total_mappings,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SetupResponse {
    pub success: bool,
    pub data: SetupData,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetupData {
    pub seeded_courses: usize,
    pub seeded_mappings: usize,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stats_envelope_serializes_camel_case() {
        let body = serde_json::to_value(StatsResponse {
            success: true,
            data: StatsData {
                total_courses: 3,
                total_certifications: 4,
                total_mappings: 4,
            },
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "success": true,
                "data": {
                    "totalCourses": 3,
                    "totalCertifications": 4,
                    "totalMappings": 4
                }
            })
        );
    }
}
