use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{ProfileDto, UpdateProfileDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, json::ApiJson, language::Lang},
        model::user::UpdateProfileParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated user's profile.
///
/// # Returns
/// - `200 OK` - Profile with group memberships
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Token subject no longer exists
#[utoipa::path(
    get,
    path = "/user/profile",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Profile of the authenticated user", body = ProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Lang(lang): Lang,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.jwt, &headers).require()?;

    let profile = UserService::new(&state.db).get_profile(user.id).await?;

    Ok(Json(profile.into_dto(lang)))
}

/// Update the authenticated user's names and email.
#[utoipa::path(
    put,
    path = "/user/profile",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 400, description = "Blank first or last name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Lang(lang): Lang,
    ApiJson(payload): ApiJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.jwt, &headers).require()?;

    let profile = UserService::new(&state.db)
        .update_profile(user.id, UpdateProfileParams::from_dto(payload))
        .await?;

    Ok(Json(profile.into_dto(lang)))
}
