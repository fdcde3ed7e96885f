use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000007_create_professor_table::Professor, m20250901_000008_create_class_table::Class,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassProfessor::Table)
                    .if_not_exists()
                    .col(integer(ClassProfessor::ClassId))
                    .col(integer(ClassProfessor::ProfessorId))
                    .primary_key(
                        Index::create()
                            .name("pk_class_professors")
                            .col(ClassProfessor::ClassId)
                            .col(ClassProfessor::ProfessorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_professors_class_id")
                            .from(ClassProfessor::Table, ClassProfessor::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_professors_professor_id")
                            .from(ClassProfessor::Table, ClassProfessor::ProfessorId)
                            .to(Professor::Table, Professor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassProfessor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassProfessor {
    #[sea_orm(iden = "class_professors")]
    Table,
    ClassId,
    ProfessorId,
}
