//! Scheduled class domain models.
//!
//! A class is reached from its course; the groups following the course give
//! both the `groups` list and, through their members, the attendees.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

use crate::{
    model::class::{AttendeeDto, ClassDto, CreateClassDto},
    server::{
        error::AppError,
        model::{
            directory::{Course, Group, Professor, Room},
            language::Language,
        },
        util::parse::parse_time,
    },
};

/// Class row with every related row needed to render it, as loaded by the
/// class repository.
#[derive(Debug, Clone)]
pub struct ClassWithRelations {
    pub class: entity::class::Model,
    pub course: entity::course::Model,
    pub room: entity::room::Model,
    /// Teaching professors ordered by id.
    pub professors: Vec<entity::professor::Model>,
    /// Groups following the course ordered by id, each with its members
    /// ordered by id.
    pub groups: Vec<(entity::group::Model, Vec<entity::user::Model>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attendee {
    pub user_id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl Attendee {
    pub fn into_dto(self) -> AttendeeDto {
        AttendeeDto {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub id: i32,
    pub date: NaiveDate,
    pub starting_time: NaiveTime,
    pub ending_time: NaiveTime,
    pub class_type: String,
    pub class_type_en: Option<String>,
    pub course: Course,
    pub room: Room,
    pub groups: Vec<Group>,
    pub professors: Vec<Professor>,
    pub attendees: Vec<Attendee>,
}

impl Class {
    pub fn from_with_relations(relations: ClassWithRelations) -> Self {
        let attendees = dedup_attendees(relations.groups.iter().flat_map(|(_, users)| users));

        Self {
            id: relations.class.id,
            date: relations.class.date,
            starting_time: relations.class.starting_time,
            ending_time: relations.class.ending_time,
            class_type: relations.class.class_type,
            class_type_en: relations.class.class_type_en,
            course: Course::from_entity(relations.course),
            room: Room::from_entity(relations.room),
            groups: relations
                .groups
                .into_iter()
                .map(|(group, _)| Group::from_entity(group))
                .collect(),
            professors: relations
                .professors
                .into_iter()
                .map(Professor::from_entity)
                .collect(),
            attendees,
        }
    }

    /// Renders the class with class type, course and group names resolved
    /// independently to `lang`.
    pub fn into_dto(self, lang: Language) -> ClassDto {
        ClassDto {
            id: self.id,
            date: self.date,
            starting_time: self.starting_time.format("%H:%M").to_string(),
            ending_time: self.ending_time.format("%H:%M").to_string(),
            class_type: lang
                .pick(&self.class_type, self.class_type_en.as_deref())
                .to_string(),
            course: self.course.into_dto(lang),
            room: self.room.into_dto(),
            groups: self
                .groups
                .into_iter()
                .map(|group| group.into_dto(lang))
                .collect(),
            professors: self
                .professors
                .into_iter()
                .map(Professor::into_dto)
                .collect(),
            attendees: self
                .attendees
                .into_iter()
                .map(Attendee::into_dto)
                .collect(),
        }
    }
}

/// Collapses users reached through several groups into one attendee each.
///
/// The first occurrence of a user id is kept, so the output follows the order
/// in which users are first seen.
pub fn dedup_attendees<'a>(
    users: impl IntoIterator<Item = &'a entity::user::Model>,
) -> Vec<Attendee> {
    let mut seen = HashSet::new();

    users
        .into_iter()
        .filter(|user| seen.insert(user.id))
        .map(|user| Attendee {
            user_id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        })
        .collect()
}

/// Parameters for scheduling a new class.
#[derive(Debug, Clone)]
pub struct CreateClassParams {
    pub date: NaiveDate,
    pub starting_time: NaiveTime,
    pub ending_time: NaiveTime,
    pub class_type: String,
    pub class_type_en: Option<String>,
    pub course_id: i32,
    pub room_id: i32,
    /// Distinct professor ids in request order.
    pub professor_ids: Vec<i32>,
}

impl CreateClassParams {
    /// Converts the request body, parsing both times.
    ///
    /// # Returns
    /// - `Ok(CreateClassParams)` - Converted parameters
    /// - `Err(AppError::BadRequest)` - A time is not `HH:MM` or `HH:MM:SS`
    pub fn from_dto(dto: CreateClassDto) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        let professor_ids = dto
            .professor_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        Ok(Self {
            date: dto.date,
            starting_time: parse_time("startingTime", &dto.starting_time)?,
            ending_time: parse_time("endingTime", &dto.ending_time)?,
            class_type: dto.class_type.trim().to_string(),
            class_type_en: dto
                .class_type_en
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            course_id: dto.course_id,
            room_id: dto.room_id,
            professor_ids,
        })
    }
}
