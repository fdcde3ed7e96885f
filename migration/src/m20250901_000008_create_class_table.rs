use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000004_create_course_table::Course, m20250901_000006_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Class::Table)
                    .if_not_exists()
                    .col(pk_auto(Class::Id))
                    .col(date(Class::Date))
                    .col(time(Class::StartingTime))
                    .col(time(Class::EndingTime))
                    .col(string(Class::ClassType))
                    .col(string_null(Class::ClassTypeEn))
                    .col(integer(Class::CourseId))
                    .col(integer(Class::RoomId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_course_id")
                            .from(Class::Table, Class::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_room_id")
                            .from(Class::Table, Class::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_classes_date_starting_time")
                    .table(Class::Table)
                    .col(Class::Date)
                    .col(Class::StartingTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Class::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Class {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Date,
    StartingTime,
    EndingTime,
    ClassType,
    ClassTypeEn,
    CourseId,
    RoomId,
}
