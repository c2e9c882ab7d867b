use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GalleryImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(GalleryImages::ImageUrl).text().not_null())
                    .col(ColumnDef::new(GalleryImages::PublicId).text().not_null())
                    .col(
                        ColumnDef::new(GalleryImages::Caption)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(GalleryImages::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GalleryImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(GalleryImages::UpdatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_gallery_images_listing
                ON gallery_images (display_order ASC, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_gallery_images_updated_at
                BEFORE UPDATE ON gallery_images
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
                DROP TRIGGER IF EXISTS update_gallery_images_updated_at ON gallery_images;
                DROP INDEX IF EXISTS idx_gallery_images_listing;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GalleryImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GalleryImages {
    Table,
    Id,
    ImageUrl,
    PublicId,
    Caption,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
