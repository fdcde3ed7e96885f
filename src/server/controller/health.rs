use axum::{response::IntoResponse, Json};

use crate::model::api::HealthDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}
