use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One mapping per (course_code, certification_area_code) pair.
        // IF NOT EXISTS keeps re-application a silent no-op on databases that
        // already carry the constraint.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("uq_certification_mappings_course_area")
                    .table(CertificationMappings::Table)
                    .col(CertificationMappings::CourseCode)
                    .col(CertificationMappings::CertificationAreaCode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_certification_mappings_course_area")
                    .table(CertificationMappings::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum CertificationMappings {
    Table,
    CourseCode,
    CertificationAreaCode,
}
