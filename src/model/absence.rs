use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceDto {
    pub id: i32,
    pub username: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub additional_info: Option<String>,
    /// One of `pending`, `approved` or `rejected`.
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAbsenceDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAbsenceStatusDto {
    pub status: String,
}
