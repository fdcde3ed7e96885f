use sea_orm_migration::{prelude::*, schema::*};

use super::m20250912_000011_create_card_table::Card;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardContent::Table)
                    .if_not_exists()
                    .col(pk_auto(CardContent::Id))
                    .col(integer(CardContent::CardId))
                    .col(integer_null(CardContent::ParentId))
                    .col(string(CardContent::ContentType))
                    .col(text_null(CardContent::Content))
                    .col(text_null(CardContent::ContentEn))
                    .col(string_null(CardContent::Url))
                    .col(string_null(CardContent::CssClass))
                    .col(integer(CardContent::SortOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_contents_card_id")
                            .from(CardContent::Table, CardContent::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_contents_parent_id")
                            .from(CardContent::Table, CardContent::ParentId)
                            .to(CardContent::Table, CardContent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardContent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardContent {
    #[sea_orm(iden = "card_contents")]
    Table,
    Id,
    CardId,
    ParentId,
    ContentType,
    Content,
    ContentEn,
    Url,
    CssClass,
    SortOrder,
}
