use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{
            LoginDto, LoginResponseDto, LoginUserDto, RegisterDto, RegisterResponseDto, TokenDto,
        },
    },
    server::{
        error::AppError, middleware::json::ApiJson, service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// # Returns
/// - `200 OK` - Credentials accepted, body carries the access token
/// - `400 Bad Request` - Body is not a valid login payload
/// - `401 Unauthorized` - Unknown user or wrong password
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let (user, access_token) = service.login(&payload.username, &payload.password).await?;

    Ok(Json(LoginResponseDto {
        message: "Login successful".to_string(),
        user: LoginUserDto {
            username: user.username,
        },
        token: TokenDto { access_token },
    }))
}

/// Create an account.
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Blank username or password
/// - `409 Conflict` - Username already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponseDto),
        (status = 400, description = "Missing username or password", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let user = service
        .register(
            &payload.username,
            &payload.password,
            &payload.first_name,
            &payload.last_name,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            message: "User registered successfully".to_string(),
            user: user.into_registered_dto(),
        }),
    ))
}
