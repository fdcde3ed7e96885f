use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::directory::{CourseDto, GroupDto, ProfessorDto, RoomDto};

/// User attending a class through one of the course's groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeDto {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Scheduled class with its course, room, groups, professors and attendees.
///
/// Times are formatted as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassDto {
    pub id: i32,
    pub date: NaiveDate,
    pub starting_time: String,
    pub ending_time: String,
    pub class_type: String,
    pub course: CourseDto,
    pub room: RoomDto,
    pub groups: Vec<GroupDto>,
    pub professors: Vec<ProfessorDto>,
    pub attendees: Vec<AttendeeDto>,
}

/// Body of `POST /classes/addclass`.
///
/// Times accept `HH:MM` or `HH:MM:SS`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    pub date: NaiveDate,
    pub starting_time: String,
    pub ending_time: String,
    pub class_type: String,
    #[serde(rename = "classType_en", default)]
    pub class_type_en: Option<String>,
    pub course_id: i32,
    pub room_id: i32,
    #[serde(default)]
    pub professor_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateClassResponseDto {
    pub message: String,
    pub class_instance: ClassDto,
}
