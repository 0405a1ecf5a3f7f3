use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on certification_mappings.course_code for the per-course
        // certification lookup
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_certification_mappings_course_code")
                    .table(CertificationMappings::Table)
                    .col(CertificationMappings::CourseCode)
                    .to_owned(),
            )
            .await?;

        // Index on the description for name-based lookups and distinct scans
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_certification_mappings_area_description")
                    .table(CertificationMappings::Table)
                    .col(CertificationMappings::CertificationAreaDescription)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_certification_mappings_area_description")
                    .table(CertificationMappings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_certification_mappings_course_code")
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
    CertificationAreaDescription,
}
