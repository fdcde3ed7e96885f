use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, user::UserRepository},
    error::AppError,
    model::user::{Profile, UpdateProfileParams},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's profile with the groups they belong to.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Profile of the user
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_profile(&self, user_id: i32) -> Result<Profile, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let groups = GroupRepository::new(self.db).get_for_user(user_id).await?;

        Ok(Profile { user, groups })
    }

    /// Updates names and email of a user.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Updated profile
    /// - `Err(AppError::BadRequest)` - Blank first or last name
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<Profile, AppError> {
        if params.first_name.is_empty() || params.last_name.is_empty() {
            return Err(AppError::BadRequest(
                "firstName and lastName are required".to_string(),
            ));
        }

        let Some(user) = UserRepository::new(self.db)
            .update_profile(user_id, params)
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let groups = GroupRepository::new(self.db).get_for_user(user_id).await?;

        Ok(Profile { user, groups })
    }
}
