//! Group data repository, including group membership.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::directory::Group;

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all groups ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Gets the groups a user belongs to, ordered by id.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::group::Relation::UserGroup.def(),
            )
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find()
            .filter(entity::group::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    pub async fn create(&self, name: &str, name_en: Option<&str>) -> Result<Group, DbErr> {
        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            name_en: ActiveValue::Set(name_en.map(str::to_string)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    /// Adds a user to a group.
    pub async fn add_member(&self, group_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Group::find().count(self.db).await
    }
}
