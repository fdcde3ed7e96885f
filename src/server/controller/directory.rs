use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        directory::{CourseDto, GroupDto, ProfessorDto, RoomDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, language::Lang},
        service::directory::DirectoryService,
        state::AppState,
    },
};

/// Tag for grouping directory endpoints in OpenAPI documentation
pub static DIRECTORY_TAG: &str = "directory";

/// List all groups ordered by id.
#[utoipa::path(
    get,
    path = "/groups",
    tag = DIRECTORY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
    Lang(lang): Lang,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let groups = DirectoryService::new(&state.db).groups().await?;

    Ok(Json(
        groups
            .into_iter()
            .map(|group| group.into_dto(lang))
            .collect::<Vec<_>>(),
    ))
}

/// List all rooms ordered by name.
#[utoipa::path(
    get,
    path = "/rooms",
    tag = DIRECTORY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All rooms", body = Vec<RoomDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let rooms = DirectoryService::new(&state.db).rooms().await?;

    Ok(Json(rooms.into_iter().map(|room| room.into_dto()).collect::<Vec<_>>()))
}

/// List all courses ordered by id.
#[utoipa::path(
    get,
    path = "/courses",
    tag = DIRECTORY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All courses", body = Vec<CourseDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Lang(lang): Lang,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let courses = DirectoryService::new(&state.db).courses().await?;

    Ok(Json(
        courses
            .into_iter()
            .map(|course| course.into_dto(lang))
            .collect::<Vec<_>>(),
    ))
}

/// List all professors ordered by name.
#[utoipa::path(
    get,
    path = "/professors",
    tag = DIRECTORY_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All professors", body = Vec<ProfessorDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_professors(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let professors = DirectoryService::new(&state.db).professors().await?;

    Ok(Json(
        professors
            .into_iter()
            .map(|professor| professor.into_dto())
            .collect::<Vec<_>>(),
    ))
}
