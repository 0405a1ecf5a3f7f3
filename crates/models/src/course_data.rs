use serde::{Deserialize, Serialize};

/// A single SCED course as carried between the importer, database and server
/// crates. `code` is the natural key; the remaining fields are free text and
/// default to empty strings when a source file omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub code_description: String,
    pub description: String,
    pub subject_area: String,
    pub level: String,
    pub cte_indicator: String,
}

impl CourseRecord {
    /// Value the CTE indicator takes for career-technical courses.
    pub const CTE_YES: &'static str = "Yes";
    pub const CTE_NO: &'static str = "No";

    pub fn is_cte(&self) -> bool {
        self.cte_indicator == Self::CTE_YES
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cte_flag() {
        let mut course = CourseRecord {
            code: "20114".to_string(),
            code_description: "Agriscience Foundations".to_string(),
            description: String::new(),
            subject_area: String::new(),
            level: String::new(),
            cte_indicator: CourseRecord::CTE_YES.to_string(),
        };
        assert!(course.is_cte());

        course.cte_indicator = CourseRecord::CTE_NO.to_string();
        assert!(!course.is_cte());

        // Anything other than the exact "Yes" value is not a CTE course
        course.cte_indicator = "yes".to_string();
        assert!(!course.is_cte());
    }
}
