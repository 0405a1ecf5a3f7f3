use serde::{Deserialize, Serialize};

/// A link between a course and a teaching-certification area. The pair
/// (course_code, certification_area_code) identifies a mapping; the
/// description is the human-readable label name-based lookups match against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationMappingRecord {
    pub course_code: String,
    pub certification_area_code: String,
    pub certification_area_description: String,
}

impl CertificationMappingRecord {
    pub fn new(
        course_code: impl Into<String>,
        certification_area_code: impl Into<String>,
        certification_area_description: impl Into<String>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            certification_area_code: certification_area_code.into(),
            certification_area_description: certification_area_description.into(),
        }
    }
}
