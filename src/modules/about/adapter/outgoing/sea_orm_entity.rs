use sea_orm::entity::prelude::*;

/// The only admissible primary key of a singleton table.
pub const SINGLETON_ID: i16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "about_sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i16,

    #[sea_orm(column_type = "JsonBinary")]
    pub content: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image_public_id: Option<String>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
