use super::common::PaginationMeta;
use database::entities::courses;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    /// Mirrors `code`; kept for clients that key rows on `id`
    pub id: String,
    pub code: String,
    pub code_description: String,
    pub description: String,
    pub subject_area: String,
    pub level: String,
    pub cte_indicator: String,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.code.clone(),
            code: course.code,
            code_description: course.code_description,
            description: course.description,
            subject_area: course.subject_area,
            level: course.level,
            cte_indicator: course.cte_indicator,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseSearchResponse {
    pub success: bool,
    pub data: Vec<CourseResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailData {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub certifications: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailResponse {
    pub success: bool,
    pub data: CourseDetailData,
}

#[cfg(test)]
mod test {
    use super::*;

    fn biology() -> courses::Model {
        courses::Model {
            code: "03001".to_string(),
            code_description: "Biology".to_string(),
            description: "A first course in the biological sciences".to_string(),
            subject_area: "Life and Physical Sciences".to_string(),
            level: "High School".to_string(),
            cte_indicator: "No".to_string(),
        }
    }

    #[test]
    fn test_derived_id_mirrors_code() {
        let dto = CourseResponse::from(biology());
        assert_eq!(dto.id, "03001");
        assert_eq!(dto.id, dto.code);
    }

    #[test]
    fn test_detail_envelope_serializes_camel_case() {
        let body = serde_json::to_value(CourseDetailResponse {
            success: true,
            data: CourseDetailData {
                course: biology().into(),
                certifications: vec![
                    "Biology (Grades 5-9)".to_string(),
                    "Biology (Grades 7-12)".to_string(),
                ],
            },
        })
        .unwrap();

        assert_eq!(body["success"], serde_json::json!(true));
        assert_eq!(body["data"]["codeDescription"], "Biology");
        assert_eq!(body["data"]["cteIndicator"], "No");
        assert_eq!(
            body["data"]["certifications"],
            serde_json::json!(["Biology (Grades 5-9)", "Biology (Grades 7-12)"])
        );
    }
}
