use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Absence::Table)
                    .if_not_exists()
                    .col(pk_auto(Absence::Id))
                    .col(integer(Absence::UserId))
                    .col(date(Absence::StartDate))
                    .col(date(Absence::EndDate))
                    .col(string(Absence::Reason))
                    .col(text_null(Absence::AdditionalInfo))
                    .col(string(Absence::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_absences_user_id")
                            .from(Absence::Table, Absence::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Absence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Absence {
    #[sea_orm(iden = "absences")]
    Table,
    Id,
    UserId,
    StartDate,
    EndDate,
    Reason,
    AdditionalInfo,
    Status,
}
