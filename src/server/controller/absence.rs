use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        absence::{AbsenceDto, CreateAbsenceDto, UpdateAbsenceStatusDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, json::ApiJson},
        model::absence::{Absence, AbsenceStatus, CreateAbsenceParams},
        service::absence::AbsenceService,
        state::AppState,
    },
};

/// Tag for grouping absence endpoints in OpenAPI documentation
pub static ABSENCE_TAG: &str = "absence";

fn render(absences: Vec<Absence>) -> Json<Vec<AbsenceDto>> {
    Json(absences.into_iter().map(Absence::into_dto).collect())
}

/// List every declared absence, newest first.
#[utoipa::path(
    get,
    path = "/absences",
    tag = ABSENCE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All absences", body = Vec<AbsenceDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_absences(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let absences = AbsenceService::new(&state.db).get_all().await?;

    Ok(render(absences))
}

/// List the authenticated user's absences.
#[utoipa::path(
    get,
    path = "/absences/user",
    tag = ABSENCE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Absences of the authenticated user", body = Vec<AbsenceDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_absences(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.jwt, &headers).require()?;

    let absences = AbsenceService::new(&state.db).get_for_user(user.id).await?;

    Ok(render(absences))
}

/// Declare an absence for the authenticated user.
///
/// # Returns
/// - `201 Created` - Absence recorded as pending
/// - `400 Bad Request` - Start after end or blank reason
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/absences",
    tag = ABSENCE_TAG,
    security(("bearer" = [])),
    request_body = CreateAbsenceDto,
    responses(
        (status = 201, description = "Absence declared", body = AbsenceDto),
        (status = 400, description = "Invalid absence data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_absence(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateAbsenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.jwt, &headers).require()?;

    let absence = AbsenceService::new(&state.db)
        .create(CreateAbsenceParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(absence.into_dto())))
}

/// Review an absence.
#[utoipa::path(
    put,
    path = "/absences/{id}/status",
    tag = ABSENCE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Absence id")
    ),
    request_body = UpdateAbsenceStatusDto,
    responses(
        (status = 200, description = "Updated absence", body = AbsenceDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Absence not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_absence_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateAbsenceStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let status = AbsenceStatus::parse(&payload.status)?;
    let absence = AbsenceService::new(&state.db)
        .update_status(id, status)
        .await?;

    Ok(Json(absence.into_dto()))
}
