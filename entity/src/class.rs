use sea_orm::entity::prelude::*;

/// One scheduled session of a course.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub starting_time: Time,
    pub ending_time: Time,
    pub class_type: String,
    pub class_type_en: Option<String>,
    pub course_id: i32,
    pub room_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_delete = "Cascade"
    )]
    Room,
    #[sea_orm(has_many = "super::class_professor::Entity")]
    ClassProfessor,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::class_professor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassProfessor.def()
    }
}

impl Related<super::professor::Entity> for Entity {
    fn to() -> RelationDef {
        super::class_professor::Relation::Professor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::class_professor::Relation::Class.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
