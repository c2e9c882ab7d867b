pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_admins_table;
mod m20260301_000002_create_about_sections_table;
mod m20260301_000003_create_hero_sections_table;
mod m20260301_000004_create_contact_infos_table;
mod m20260301_000005_create_experiences_table;
mod m20260301_000006_create_testimonials_table;
mod m20260301_000007_create_gallery_images_table;
mod m20260301_000008_create_journey_items_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_admins_table::Migration),
            Box::new(m20260301_000002_create_about_sections_table::Migration),
            Box::new(m20260301_000003_create_hero_sections_table::Migration),
            Box::new(m20260301_000004_create_contact_infos_table::Migration),
            Box::new(m20260301_000005_create_experiences_table::Migration),
            Box::new(m20260301_000006_create_testimonials_table::Migration),
            Box::new(m20260301_000007_create_gallery_images_table::Migration),
            Box::new(m20260301_000008_create_journey_items_table::Migration),
        ]
    }
}
