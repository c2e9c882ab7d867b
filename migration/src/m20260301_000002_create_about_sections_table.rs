use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Singleton: the only admissible primary key is 1
        manager
            .create_table(
                Table::create()
                    .table(AboutSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutSections::Id)
                            .small_integer()
                            .not_null()
                            .primary_key()
                            .default(1)
                            .check(Expr::col(AboutSections::Id).eq(1)),
                    )
                    .col(ColumnDef::new(AboutSections::Content).json_binary().not_null())
                    .col(ColumnDef::new(AboutSections::ProfileImageUrl).text())
                    .col(ColumnDef::new(AboutSections::ProfileImagePublicId).text())
                    .col(
                        ColumnDef::new(AboutSections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AboutSections::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_about_sections_updated_at
                BEFORE UPDATE ON about_sections
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_about_sections_updated_at ON about_sections;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AboutSections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AboutSections {
    Table,
    Id,
    Content,
    ProfileImageUrl,
    ProfileImagePublicId,
    CreatedAt,
    UpdatedAt,
}
