use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        class::{ClassDto, CreateClassDto, CreateClassResponseDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, json::ApiJson, language::Lang},
        model::class::{Class, CreateClassParams},
        service::class::ClassService,
        state::AppState,
        util::parse::parse_id_list,
    },
};

/// Tag for grouping timetable endpoints in OpenAPI documentation
pub static CLASS_TAG: &str = "class";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GroupIdsQuery {
    /// Comma separated group ids, e.g. `1,2`
    pub group_ids: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RoomIdsQuery {
    /// Comma separated room ids, e.g. `1,2`
    pub room_ids: Option<String>,
}

fn render(classes: Vec<Class>, lang: Lang) -> Json<Vec<ClassDto>> {
    Json(
        classes
            .into_iter()
            .map(|class| class.into_dto(lang.0))
            .collect(),
    )
}

/// Timetable of the authenticated user.
///
/// Lists every class of the courses followed by the user's groups, sorted by
/// date and start time.
///
/// # Returns
/// - `200 OK` - Classes of the user
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Token subject no longer exists
#[utoipa::path(
    get,
    path = "/classes/user",
    tag = CLASS_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Classes of the authenticated user", body = Vec<ClassDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
    lang: Lang,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.jwt, &headers).require()?;

    let classes = ClassService::new(&state.db).classes_for_user(user.id).await?;

    Ok(render(classes, lang))
}

/// Classes of the given groups.
#[utoipa::path(
    get,
    path = "/classes/group",
    tag = CLASS_TAG,
    security(("bearer" = [])),
    params(GroupIdsQuery),
    responses(
        (status = 200, description = "Classes followed by any of the groups", body = Vec<ClassDto>),
        (status = 400, description = "Non-numeric group id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
    lang: Lang,
    Query(query): Query<GroupIdsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let group_ids = parse_id_list("groupIds", query.group_ids.as_deref())?;
    let classes = ClassService::new(&state.db)
        .classes_for_groups(&group_ids)
        .await?;

    Ok(render(classes, lang))
}

/// Classes held in the given rooms.
#[utoipa::path(
    get,
    path = "/classes/rooms",
    tag = CLASS_TAG,
    security(("bearer" = [])),
    params(RoomIdsQuery),
    responses(
        (status = 200, description = "Classes held in any of the rooms", body = Vec<ClassDto>),
        (status = 400, description = "Non-numeric room id", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_classes(
    State(state): State<AppState>,
    headers: HeaderMap,
    lang: Lang,
    Query(query): Query<RoomIdsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let room_ids = parse_id_list("roomIds", query.room_ids.as_deref())?;
    let classes = ClassService::new(&state.db)
        .classes_for_rooms(&room_ids)
        .await?;

    Ok(render(classes, lang))
}

/// Schedule a class.
///
/// # Returns
/// - `201 Created` - Class scheduled
/// - `400 Bad Request` - Unparsable time or start not before end
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown course, room or professor
#[utoipa::path(
    post,
    path = "/classes/addclass",
    tag = CLASS_TAG,
    security(("bearer" = [])),
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class added successfully", body = CreateClassResponseDto),
        (status = 400, description = "Invalid class data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Course, room or professor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_class(
    State(state): State<AppState>,
    headers: HeaderMap,
    lang: Lang,
    ApiJson(payload): ApiJson<CreateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let params = CreateClassParams::from_dto(payload)?;
    let class = ClassService::new(&state.db).add_class(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateClassResponseDto {
            message: "Class added successfully".to_string(),
            class_instance: class.into_dto(lang.0),
        }),
    ))
}
