//! User domain models and parameters.

use crate::{
    model::{auth::RegisteredUserDto, user::ProfileDto},
    server::model::{directory::Group, language::Language},
};

/// Stored user account. The password hash never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
        }
    }

    pub fn into_registered_dto(self) -> RegisteredUserDto {
        RegisteredUserDto {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// A user together with the groups they belong to.
#[derive(Debug, Clone)]
pub struct Profile {
    pub user: User,
    pub groups: Vec<Group>,
}

impl Profile {
    pub fn into_dto(self, lang: Language) -> ProfileDto {
        ProfileDto {
            id: self.user.id,
            username: self.user.username,
            first_name: self.user.first_name,
            last_name: self.user.last_name,
            email: self.user.email,
            groups: self
                .groups
                .into_iter()
                .map(|group| group.into_dto(lang))
                .collect(),
        }
    }
}

/// Parameters for inserting a new account. `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

impl UpdateProfileParams {
    /// Trims names and turns a blank email into `None`.
    pub fn from_dto(dto: crate::model::user::UpdateProfileDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto
                .email
                .map(|email| email.trim().to_string())
                .filter(|email| !email.is_empty()),
        }
    }
}
