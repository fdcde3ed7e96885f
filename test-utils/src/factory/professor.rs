use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a professor named `"Professor {id}"`.
pub async fn create_professor(db: &DatabaseConnection) -> Result<entity::professor::Model, DbErr> {
    create_professor_named(db, format!("Professor {}", next_id())).await
}

pub async fn create_professor_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::professor::Model, DbErr> {
    entity::professor::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
