use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::directory::Room;

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all rooms ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    pub async fn create(&self, name: &str) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    /// Ids of every room in insertion order.
    pub async fn ids(&self) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Room::find().count(self.db).await
    }
}
