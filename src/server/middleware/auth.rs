use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::token::JwtKeys,
};

/// Identity taken from a verified access token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
}

/// Bearer token check run at the top of every protected handler.
///
/// Verification only needs the signing keys, so a request with a bad token is
/// turned away before the handler touches the database.
pub struct AuthGuard<'a> {
    keys: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(keys: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { keys, headers }
    }

    /// Verifies the `Authorization: Bearer <token>` header. The scheme is
    /// matched case-insensitively.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Subject of a valid, unexpired token
    /// - `Err(AppError::AuthErr)` - Missing or malformed header, bad signature
    ///   or expired token
    pub fn require(&self) -> Result<AuthUser, AppError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let token = value
            .to_str()
            .ok()
            .and_then(|value| value.trim().split_once(char::is_whitespace))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MalformedHeader)?;

        let claims = self.keys.verify(token)?;

        Ok(AuthUser {
            id: claims.sub,
            username: claims.username,
        })
    }
}
