use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "professors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_professor::Entity")]
    ClassProfessor,
}

impl Related<super::class_professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassProfessor.def()
    }
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        super::class_professor::Relation::Class.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::class_professor::Relation::Professor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
