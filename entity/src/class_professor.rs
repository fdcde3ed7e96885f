use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_professors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub professor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::professor::Entity",
        from = "Column::ProfessorId",
        to = "super::professor::Column::Id",
        on_delete = "Cascade"
    )]
    Professor,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
