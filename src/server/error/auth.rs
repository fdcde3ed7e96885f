use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on a protected route.
    #[error("Missing authorization header")]
    MissingToken,

    /// `Authorization` header present but not of the form `Bearer <token>`.
    #[error("Malformed authorization header")]
    MalformedHeader,

    /// Token signature, expiry or claims failed verification.
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Unknown username or wrong password. Both cases share one message so
    /// callers cannot probe which usernames exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signing a freshly issued token failed.
    #[error("Failed to issue token: {0}")]
    TokenCreation(jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Token and credential failures are logged at debug level and answered with
/// 401. Token creation failures are server faults and answered with 500.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::TokenCreation(err) => {
                tracing::error!("Failed to issue token: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::debug!("Rejected request: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
