use sea_orm::entity::prelude::*;

/// Home page card. Its content blocks live in `card_contents`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub title_en: Option<String>,
    pub css_class: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::card_content::Entity")]
    CardContent,
}

impl Related<super::card_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardContent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
