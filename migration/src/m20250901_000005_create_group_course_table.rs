use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000002_create_group_table::Group, m20250901_000004_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupCourse::Table)
                    .if_not_exists()
                    .col(integer(GroupCourse::GroupId))
                    .col(integer(GroupCourse::CourseId))
                    .primary_key(
                        Index::create()
                            .name("pk_group_courses")
                            .col(GroupCourse::GroupId)
                            .col(GroupCourse::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_courses_group_id")
                            .from(GroupCourse::Table, GroupCourse::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_courses_course_id")
                            .from(GroupCourse::Table, GroupCourse::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupCourse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupCourse {
    #[sea_orm(iden = "group_courses")]
    Table,
    GroupId,
    CourseId,
}
