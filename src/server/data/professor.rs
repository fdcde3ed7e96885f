use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::directory::Professor;

pub struct ProfessorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfessorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all professors ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Professor>, DbErr> {
        let entities = entity::prelude::Professor::find()
            .order_by_asc(entity::professor::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Professor::from_entity).collect())
    }

    /// Gets the professors among `ids` that exist, ordered by id.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Professor>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Professor::find()
            .filter(entity::professor::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::professor::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Professor::from_entity).collect())
    }

    pub async fn create(&self, name: &str) -> Result<Professor, DbErr> {
        let entity = entity::professor::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Professor::from_entity(entity))
    }

    /// Ids of every professor in insertion order.
    pub async fn ids(&self) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Professor::find()
            .order_by_asc(entity::professor::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.id).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Professor::find().count(self.db).await
    }
}
