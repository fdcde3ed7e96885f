use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub name_en: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::group_course::Entity")]
    GroupCourse,
    #[sea_orm(has_many = "super::class::Entity")]
    Class,
}

impl Related<super::group_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupCourse.def()
    }
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_course::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_course::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
