use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JourneyItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JourneyItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(JourneyItems::Age).string_len(50).not_null())
                    .col(ColumnDef::new(JourneyItems::Title).json_binary().not_null())
                    .col(ColumnDef::new(JourneyItems::Body).json_binary().not_null())
                    .col(
                        ColumnDef::new(JourneyItems::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(JourneyItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JourneyItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Journey is chronological: created_at ASC within the same order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_journey_items_listing
                ON journey_items (display_order ASC, created_at ASC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_journey_items_updated_at
                BEFORE UPDATE ON journey_items
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
                r#"
                DROP TRIGGER IF EXISTS update_journey_items_updated_at ON journey_items;
                DROP INDEX IF EXISTS idx_journey_items_listing;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JourneyItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JourneyItems {
    Table,
    Id,
    Age,
    Title,
    Body,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
