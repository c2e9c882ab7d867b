use sea_orm::entity::prelude::*;

pub const SINGLETON_ID: i16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i16,

    #[sea_orm(column_type = "JsonBinary")]
    pub title: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub subtitle: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub background_image_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub background_image_public_id: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
