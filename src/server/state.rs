//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::JwtKeys;

/// Shared resources cloned into each handler through axum's state extraction.
///
/// `DatabaseConnection` is a pool handle and `JwtKeys` holds immutable key
/// material, so cloning is cheap and no request can mutate shared state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtKeys) -> Self {
        Self { db, jwt }
    }
}
