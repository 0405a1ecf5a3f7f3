use crate::entities::certification_mappings;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
    sea_query::{Expr, extension::postgres::PgExpr},
};

pub struct CertificationService;

impl CertificationService {
    /// Distinct certification areas, optionally filtered by a substring of
    /// the description. A literal `"*"` means the same as no filter.
    pub async fn search_areas_paginated(
        db: &DatabaseConnection,
        search: &str,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<(String, String)>, u64), DbErr> {
        let mut query = certification_mappings::Entity::find()
            .select_only()
            .column(certification_mappings::Column::CertificationAreaCode)
            .column(certification_mappings::Column::CertificationAreaDescription)
            .distinct();

        if !search.is_empty() && search != "*" {
            query = query.filter(
                Expr::col((
                    certification_mappings::Entity,
                    certification_mappings::Column::CertificationAreaDescription,
                ))
                .ilike(format!("%{search}%")),
            );
        }

        let paginator = query.into_tuple::<(String, String)>().paginate(db, limit);
        let total = paginator.num_items().await?;
        let areas = paginator.fetch_page(page - 1).await?;

        Ok((areas, total))
    }
}
