use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professor::Table)
                    .if_not_exists()
                    .col(pk_auto(Professor::Id))
                    .col(string(Professor::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Professor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Professor {
    #[sea_orm(iden = "professors")]
    Table,
    Id,
    Name,
}
