use crate::entities::{certification_mappings, courses};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QuerySelect};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub total_courses: u64,
    pub total_certifications: u64,
    pub total_mappings: u64,
}

pub struct StatsService;

impl StatsService {
    /// Row counts for the admin surface. Certifications count distinct
    /// descriptions, matching how the search endpoint groups areas.
    pub async fn aggregate(db: &DatabaseConnection) -> Result<AggregateStats, DbErr> {
        let (total_courses, total_certifications, total_mappings) = futures::try_join!(
            courses::Entity::find().count(db),
            certification_mappings::Entity::find()
                .select_only()
                .column(certification_mappings::Column::CertificationAreaDescription)
                .distinct()
                .into_tuple::<String>()
                .count(db),
            certification_mappings::Entity::find().count(db),
        )?;

        Ok(AggregateStats {
            total_courses,
            total_certifications,
            total_mappings,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        [("num_items", Value::from(n))].into_iter().collect()
    }

    #[tokio::test]
    async fn test_aggregate_reads_three_counts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(3)]])
            .append_query_results([vec![count_row(2)]])
            .append_query_results([vec![count_row(4)]])
            .into_connection();

        let stats = StatsService::aggregate(&db).await.unwrap();
        assert_eq!(
            stats,
            AggregateStats {
                total_courses: 3,
                total_certifications: 2,
                total_mappings: 4,
            }
        );
    }
}
