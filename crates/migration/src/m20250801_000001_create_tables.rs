use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::CodeDescription).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::SubjectArea).string().not_null())
                    .col(ColumnDef::new(Courses::Level).string().not_null())
                    .col(
                        ColumnDef::new(Courses::CteIndicator)
                            .string()
                            .not_null()
                            .default("No"),
                    )
                    .to_owned(),
            )
            .await?;

        // Create certification_mappings table. course_code is intentionally
        // not a foreign key: mapping files may arrive before their courses.
        manager
            .create_table(
                Table::create()
                    .table(CertificationMappings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CertificationMappings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CertificationMappings::CourseCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertificationMappings::CertificationAreaCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CertificationMappings::CertificationAreaDescription)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CertificationMappings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Code,
    CodeDescription,
    Description,
    SubjectArea,
    Level,
    CteIndicator,
}

#[derive(Iden)]
enum CertificationMappings {
    Table,
    Id,
    CourseCode,
    CertificationAreaCode,
    CertificationAreaDescription,
}
