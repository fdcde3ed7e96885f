use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        home::{CardDto, CardInputDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, json::ApiJson, language::Lang},
        model::home::CardParams,
        service::home::HomeService,
        state::AppState,
    },
};

/// Tag for grouping home page endpoints in OpenAPI documentation
pub static HOME_TAG: &str = "home";

/// List home cards in display order.
#[utoipa::path(
    get,
    path = "/home/cards",
    tag = HOME_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All cards with their content trees", body = Vec<CardDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cards(
    State(state): State<AppState>,
    headers: HeaderMap,
    Lang(lang): Lang,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let cards = HomeService::new(&state.db).list_cards().await?;

    Ok(Json(
        cards
            .into_iter()
            .map(|card| card.into_dto(lang))
            .collect::<Vec<_>>(),
    ))
}

/// Get one card.
#[utoipa::path(
    get,
    path = "/home/cards/{id}",
    tag = HOME_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Card id")
    ),
    responses(
        (status = 200, description = "The card", body = CardDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Lang(lang): Lang,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let card = HomeService::new(&state.db).get_card(id).await?;

    Ok(Json(card.into_dto(lang)))
}

/// Create a card with its content tree.
///
/// # Returns
/// - `201 Created` - Card created
/// - `400 Bad Request` - Blank title or content type
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/home/cards",
    tag = HOME_TAG,
    security(("bearer" = [])),
    request_body = CardInputDto,
    responses(
        (status = 201, description = "Card created", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Lang(lang): Lang,
    ApiJson(payload): ApiJson<CardInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let card = HomeService::new(&state.db)
        .create_card(CardParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(card.into_dto(lang))))
}

/// Replace a card and its whole content tree.
#[utoipa::path(
    put,
    path = "/home/cards/{id}",
    tag = HOME_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Card id")
    ),
    request_body = CardInputDto,
    responses(
        (status = 200, description = "Card updated", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Lang(lang): Lang,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<CardInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    let card = HomeService::new(&state.db)
        .update_card(id, CardParams::from_dto(payload))
        .await?;

    Ok(Json(card.into_dto(lang)))
}

/// Delete a card and all of its content.
#[utoipa::path(
    delete,
    path = "/home/cards/{id}",
    tag = HOME_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Card id")
    ),
    responses(
        (status = 204, description = "Card deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require()?;

    HomeService::new(&state.db).delete_card(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
