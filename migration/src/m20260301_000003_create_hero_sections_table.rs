use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeroSections::Id)
                            .small_integer()
                            .not_null()
                            .primary_key()
                            .default(1)
                            .check(Expr::col(HeroSections::Id).eq(1)),
                    )
                    .col(ColumnDef::new(HeroSections::Title).json_binary().not_null())
                    .col(ColumnDef::new(HeroSections::Subtitle).json_binary().not_null())
                    .col(ColumnDef::new(HeroSections::BackgroundImageUrl).text())
                    .col(ColumnDef::new(HeroSections::BackgroundImagePublicId).text())
                    .col(
                        ColumnDef::new(HeroSections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(HeroSections::UpdatedAt)
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
                CREATE TRIGGER update_hero_sections_updated_at
                BEFORE UPDATE ON hero_sections
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
                "DROP TRIGGER IF EXISTS update_hero_sections_updated_at ON hero_sections;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HeroSections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HeroSections {
    Table,
    Id,
    Title,
    Subtitle,
    BackgroundImageUrl,
    BackgroundImagePublicId,
    CreatedAt,
    UpdatedAt,
}
