use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub name_en: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_group::Entity")]
    UserGroup,
    #[sea_orm(has_many = "super::group_course::Entity")]
    GroupCourse,
}

impl Related<super::user_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGroup.def()
    }
}

impl Related<super::group_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupCourse.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_group::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_group::Relation::Group.def().rev())
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_course::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
