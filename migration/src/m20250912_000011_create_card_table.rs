use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(string(Card::Title))
                    .col(string_null(Card::TitleEn))
                    .col(string_null(Card::CssClass))
                    .col(integer(Card::SortOrder))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    #[sea_orm(iden = "cards")]
    Table,
    Id,
    Title,
    TitleEn,
    CssClass,
    SortOrder,
}
