use crate::entities::{certification_mappings, courses};
use log::warn;
use models::{
    certification_data::CertificationMappingRecord,
    course_data::CourseRecord,
    import_data::{CsvRows, ImportSummary, RowOutcome},
};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct ImportService;

impl ImportService {
    /// Inserts a course unless a row with the same code already exists.
    /// Returns whether an insert occurred.
    pub async fn insert_course_if_absent(
        db: &DatabaseConnection,
        record: &CourseRecord,
    ) -> Result<bool, DbErr> {
        let exists = courses::Entity::find_by_id(record.code.as_str())
            .one(db)
            .await?
            .is_some();
        if exists {
            return Ok(false);
        }

        courses::Entity::insert(courses::ActiveModel {
            code: Set(record.code.clone()),
            code_description: Set(record.code_description.clone()),
            description: Set(record.description.clone()),
            subject_area: Set(record.subject_area.clone()),
            level: Set(record.level.clone()),
            cte_indicator: Set(record.cte_indicator.clone()),
        })
        .exec(db)
        .await?;

        Ok(true)
    }

    /// Inserts a mapping unless a row with the same
    /// (course_code, certification_area_code) pair already exists.
    pub async fn insert_mapping_if_absent(
        db: &DatabaseConnection,
        record: &CertificationMappingRecord,
    ) -> Result<bool, DbErr> {
        let exists = certification_mappings::Entity::find()
            .filter(
                certification_mappings::Column::CourseCode.eq(record.course_code.as_str()),
            )
            .filter(
                certification_mappings::Column::CertificationAreaCode
                    .eq(record.certification_area_code.as_str()),
            )
            .one(db)
            .await?
            .is_some();
        if exists {
            return Ok(false);
        }

        certification_mappings::Entity::insert(certification_mappings::ActiveModel {
            course_code: Set(record.course_code.clone()),
            certification_area_code: Set(record.certification_area_code.clone()),
            certification_area_description: Set(record.certification_area_description.clone()),
            ..Default::default()
        })
        .exec(db)
        .await?;

        Ok(true)
    }

    /// Runs a parsed file against the database row by row, in file order.
    /// A failing row is logged and recorded, never fatal; the summary keeps
    /// one outcome per file row.
    pub async fn import(db: &DatabaseConnection, rows: &CsvRows) -> ImportSummary {
        let mut summary = ImportSummary::new(rows.table());

        match rows {
            CsvRows::Courses(rows) => {
                for row in rows {
                    let outcome = match row {
                        Ok(record) => {
                            Self::outcome(Self::insert_course_if_absent(db, record).await)
                        }
                        Err(field) => RowOutcome::MissingField(*field),
                    };
                    summary.record(outcome);
                }
            }
            CsvRows::CertificationMappings(rows) => {
                for row in rows {
                    let outcome = match row {
                        Ok(record) => {
                            Self::outcome(Self::insert_mapping_if_absent(db, record).await)
                        }
                        Err(field) => RowOutcome::MissingField(*field),
                    };
                    summary.record(outcome);
                }
            }
        }

        summary
    }

    fn outcome(result: Result<bool, DbErr>) -> RowOutcome {
        match result {
            Ok(true) => RowOutcome::Inserted,
            Ok(false) => RowOutcome::AlreadyExists,
            Err(err) => {
                warn!("row insert failed, continuing import: {err}");
                RowOutcome::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn biology() -> CourseRecord {
        CourseRecord {
            code: "03001".to_string(),
            code_description: "Biology".to_string(),
            description: String::new(),
            subject_area: String::new(),
            level: String::new(),
            cte_indicator: "No".to_string(),
        }
    }

    fn agriscience() -> CourseRecord {
        CourseRecord {
            code: "20114".to_string(),
            code_description: "Agriscience Foundations".to_string(),
            description: String::new(),
            subject_area: String::new(),
            level: String::new(),
            cte_indicator: "Yes".to_string(),
        }
    }

    fn existing_course() -> crate::entities::courses::Model {
        crate::entities::courses::Model {
            code: "03001".to_string(),
            code_description: "Biology".to_string(),
            description: String::new(),
            subject_area: String::new(),
            level: String::new(),
            cte_indicator: "No".to_string(),
        }
    }

    fn returning_row(code: &str) -> BTreeMap<&'static str, Value> {
        [("code", Value::from(code))].into_iter().collect()
    }

    #[tokio::test]
    async fn test_insert_course_if_absent_skips_existing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing_course()]])
            .into_connection();

        let inserted = ImportService::insert_course_if_absent(&db, &biology())
            .await
            .unwrap();
        assert!(!inserted);
    }

    #[tokio::test]
    async fn test_insert_course_if_absent_writes_new_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<crate::entities::courses::Model>::new()])
            .append_query_results([vec![returning_row("20114")]])
            .into_connection();

        let inserted = ImportService::insert_course_if_absent(&db, &agriscience())
            .await
            .unwrap();
        assert!(inserted);
    }

    #[tokio::test]
    async fn test_reimport_of_existing_mapping_inserts_nothing() {
        let rows = CsvRows::CertificationMappings(vec![Ok(CertificationMappingRecord::new(
            "03001",
            "015",
            "Biology (Grades 5-9)",
        ))]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![certification_mappings::Model {
                id: 1,
                course_code: "03001".to_string(),
                certification_area_code: "015".to_string(),
                certification_area_description: "Biology (Grades 5-9)".to_string(),
            }]])
            .into_connection();

        let summary = ImportService::import(&db, &rows).await;
        assert_eq!(summary.rows(), 1);
        assert_eq!(summary.inserted(), 0);
        assert_eq!(summary.outcomes[0], RowOutcome::AlreadyExists);
    }

    #[tokio::test]
    async fn test_import_absorbs_row_failures_and_continues() {
        let rows = CsvRows::Courses(vec![
            Ok(biology()),
            Err("course_code"),
            Ok(agriscience()),
        ]);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // first row: the existence check blows up
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            // third row: clean miss then insert
            .append_query_results([Vec::<crate::entities::courses::Model>::new()])
            .append_query_results([vec![returning_row("20114")]])
            .into_connection();

        let summary = ImportService::import(&db, &rows).await;
        assert_eq!(summary.rows(), 3);
        assert_eq!(summary.inserted(), 1);
        assert!(matches!(summary.outcomes[0], RowOutcome::Failed(_)));
        assert_eq!(summary.outcomes[1], RowOutcome::MissingField("course_code"));
        assert_eq!(summary.outcomes[2], RowOutcome::Inserted);
    }
}
