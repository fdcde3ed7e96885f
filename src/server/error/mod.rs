//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler, service and
//! startup routine. It wraps the domain errors (`AuthError`, `ConfigError`) and
//! library errors, and maps each of them onto an HTTP status with a JSON body
//! of the form `{"error": "..."}`.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure. Delegates to `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 409 Conflict, everything else 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or filesystem error, raised while binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Password hashing failure.
    #[error("Password hashing failed: {0}")]
    PasswordHashErr(argon2::password_hash::Error),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing data. Results in 409 with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::PasswordHashErr(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 401 Unauthorized - For `AuthErr`, see `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict` and unique constraint violations
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    (
                        StatusCode::CONFLICT,
                        Json(ErrorDto {
                            error: "Resource already exists".to_string(),
                        }),
                    )
                        .into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper turning any displayable error into a logged 500 response with a
/// generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
