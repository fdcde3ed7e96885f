use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a room named `"Salle {id}"`.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    create_room_named(db, format!("Salle {}", next_id())).await
}

pub async fn create_room_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::room::Model, DbErr> {
    entity::room::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
