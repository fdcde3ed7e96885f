//! Registration and login.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    service::auth::token::JwtKeys,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a JwtKeys) -> Self {
        Self { db, keys }
    }

    /// Registers a new user with an Argon2-hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Blank username or password
    /// - `Err(AppError::Conflict)` - Username already taken
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, AppError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_username(username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password_hash = password::hash(password)?;

        // A concurrent registration can still hit the unique index.
        let user = repo
            .create(CreateUserParams {
                username: username.to_string(),
                password_hash,
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("Username already exists".to_string())
                }
                _ => AppError::DbErr(err),
            })?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Checks credentials and issues an access token.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and a signed token
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown
    ///   user or wrong password
    pub async fn login(&self, username: &str, password: &str) -> Result<(User, String), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.keys.issue(user.id, &user.username)?;

        Ok((user, token))
    }
}
