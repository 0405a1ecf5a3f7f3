use crate::entities::{certification_mappings, courses};
use models::course_data::CourseRecord;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
    sea_query::{Expr, extension::postgres::PgExpr},
};

pub struct CourseService;

impl CourseService {
    /// Query courses with pagination and optional search filtering
    pub async fn search_paginated(
        db: &DatabaseConnection,
        search: &str,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<courses::Model>, u64), DbErr> {
        let mut query = courses::Entity::find();

        // An empty term returns the unfiltered set
        if !search.is_empty() {
            let pattern = format!("%{search}%");
            let search_condition = Condition::any()
                .add(
                    Expr::col((courses::Entity, courses::Column::CodeDescription))
                        .ilike(pattern.clone()),
                )
                .add(
                    Expr::col((courses::Entity, courses::Column::Description))
                        .ilike(pattern.clone()),
                )
                .add(Expr::col((courses::Entity, courses::Column::Code)).ilike(pattern));
            query = query.filter(search_condition);
        }

        // Count re-runs the same predicate so the metadata reflects the full
        // matching set, not the current page window
        let total = query.clone().count(db).await?;
        let paginator = query.paginate(db, limit);
        let courses = paginator.fetch_page(page - 1).await?; // SeaORM uses 0-based pages

        Ok((courses, total))
    }

    /// Get a single course with its certification-area descriptions attached
    pub async fn get_by_code(
        db: &DatabaseConnection,
        code: &str,
    ) -> Result<Option<(courses::Model, Vec<String>)>, DbErr> {
        let course = match courses::Entity::find_by_id(code).one(db).await? {
            Some(course) => course,
            None => return Ok(None),
        };

        let certifications = certification_mappings::Entity::find()
            .filter(certification_mappings::Column::CourseCode.eq(code))
            .order_by_asc(certification_mappings::Column::CertificationAreaDescription)
            .all(db)
            .await?
            .into_iter()
            .map(|mapping| mapping.certification_area_description)
            .collect();

        Ok(Some((course, certifications)))
    }

    /// CTE courses joined through the mapping table by exact certification
    /// name. The lookup matches the area description, not the area code.
    pub async fn cte_courses_by_certification(
        db: &DatabaseConnection,
        name: &str,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<courses::Model>, u64), DbErr> {
        let query = courses::Entity::find()
            .inner_join(certification_mappings::Entity)
            .filter(certification_mappings::Column::CertificationAreaDescription.eq(name))
            .filter(courses::Column::CteIndicator.eq(CourseRecord::CTE_YES))
            .distinct();

        let total = query.clone().count(db).await?;
        let paginator = query.paginate(db, limit);
        let courses = paginator.fetch_page(page - 1).await?;

        Ok((courses, total))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

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

    fn mapping(id: i32, description: &str) -> certification_mappings::Model {
        certification_mappings::Model {
            id,
            course_code: "03001".to_string(),
            certification_area_code: format!("{id:03}"),
            certification_area_description: description.to_string(),
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        [("num_items", Value::from(n))].into_iter().collect()
    }

    #[tokio::test]
    async fn test_get_by_code_miss_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<courses::Model>::new()])
            .into_connection();

        let found = CourseService::get_by_code(&db, "99999").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_get_by_code_attaches_certifications() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![biology()]])
            .append_query_results([vec![
                mapping(1, "Biology (Grades 5-9)"),
                mapping(2, "Biology (Grades 7-12)"),
            ]])
            .into_connection();

        let (course, certifications) = CourseService::get_by_code(&db, "03001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(course.code_description, "Biology");
        assert_eq!(
            certifications,
            vec!["Biology (Grades 5-9)", "Biology (Grades 7-12)"]
        );
    }

    #[tokio::test]
    async fn test_search_total_comes_from_count_not_page() {
        // Three matching rows overall, one on the requested page
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(3)]])
            .append_query_results([vec![biology()]])
            .into_connection();

        let (page_rows, total) = CourseService::search_paginated(&db, "bio", 2, 1)
            .await
            .unwrap();
        assert_eq!(page_rows.len(), 1);
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_cte_lookup_with_no_matches_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(0)]])
            .append_query_results([Vec::<courses::Model>::new()])
            .into_connection();

        let (rows, total) =
            CourseService::cte_courses_by_certification(&db, "Underwater Basket Weaving", 1, 20)
                .await
                .unwrap();
        assert!(rows.is_empty());
        assert_eq!(total, 0);
    }
}
