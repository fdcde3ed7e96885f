//! User data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation when the
    ///   username is already taken
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Updates names and email of an existing user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.first_name = ActiveValue::Set(params.first_name);
        active.last_name = ActiveValue::Set(params.last_name);
        active.email = ActiveValue::Set(params.email);

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }
}
