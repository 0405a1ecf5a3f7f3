use crate::services::import::ImportService;
use log::info;
use models::{certification_data::CertificationMappingRecord, course_data::CourseRecord};
use sea_orm::{DatabaseConnection, DbErr};

pub struct SeedService;

impl SeedService {
    /// Inserts the starter rows. Every row goes through insert-if-absent, so
    /// running setup repeatedly cannot duplicate data. Returns how many
    /// courses and mappings were actually written.
    pub async fn seed(db: &DatabaseConnection) -> Result<(usize, usize), DbErr> {
        let mut new_courses = 0;
        for course in Self::seed_courses() {
            if ImportService::insert_course_if_absent(db, &course).await? {
                new_courses += 1;
            }
        }

        let mut new_mappings = 0;
        for mapping in Self::seed_mappings() {
            if ImportService::insert_mapping_if_absent(db, &mapping).await? {
                new_mappings += 1;
            }
        }

        info!("seeded {new_courses} courses and {new_mappings} certification mappings");
        Ok((new_courses, new_mappings))
    }

    fn seed_courses() -> Vec<CourseRecord> {
        vec![
            CourseRecord {
                code: "03001".to_string(),
                code_description: "Biology".to_string(),
                description: "A first course in the biological sciences covering cell \
                              structure, genetics, and ecology"
                    .to_string(),
                subject_area: "Life and Physical Sciences".to_string(),
                level: "High School".to_string(),
                cte_indicator: CourseRecord::CTE_NO.to_string(),
            },
            CourseRecord {
                code: "20114".to_string(),
                code_description: "Agriscience Foundations".to_string(),
                description: "Foundations of agricultural science, animal systems, and \
                              natural resource management"
                    .to_string(),
                subject_area: "Agriculture, Food and Natural Resources".to_string(),
                level: "High School".to_string(),
                cte_indicator: CourseRecord::CTE_YES.to_string(),
            },
            CourseRecord {
                code: "01001".to_string(),
                code_description: "English/Language Arts I".to_string(),
                description: "Ninth-grade literature, composition, and language study"
                    .to_string(),
                subject_area: "English Language Arts".to_string(),
                level: "High School".to_string(),
                cte_indicator: CourseRecord::CTE_NO.to_string(),
            },
        ]
    }

    fn seed_mappings() -> Vec<CertificationMappingRecord> {
        vec![
            CertificationMappingRecord::new("03001", "015", "Biology (Grades 5-9)"),
            CertificationMappingRecord::new("03001", "002", "Biology (Grades 7-12)"),
            CertificationMappingRecord::new("20114", "777", "Agriculture (Grades 5-9)"),
            CertificationMappingRecord::new("01001", "003", "English (Grades 6-12)"),
        ]
    }
}
