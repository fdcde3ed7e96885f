//! User factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test users.
///
/// The default password hash is a placeholder and will not verify against any
/// password. Tests exercising login should register through the service.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Defaults:
    /// - username: `"user{id}"`
    /// - first_name: `"First{id}"`, last_name: `"Last{id}"`
    /// - email: `"user{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            password_hash: "placeholder-hash".to_string(),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: Some(format!("user{}@example.com", id)),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
