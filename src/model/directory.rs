use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Group with its name already resolved to the request language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
}

/// Course with its name already resolved to the request language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfessorDto {
    pub id: i32,
    pub name: String,
}
