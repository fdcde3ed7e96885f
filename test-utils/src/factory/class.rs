//! Class factory.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for scheduled classes.
///
/// Defaults to a lecture on 2025-09-01 from 09:00 to 10:30.
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    room_id: i32,
    date: NaiveDate,
    starting_time: NaiveTime,
    ending_time: NaiveTime,
    class_type: String,
    class_type_en: Option<String>,
}

impl<'a> ClassFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, course_id: i32, room_id: i32) -> Self {
        Self {
            db,
            course_id,
            room_id,
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            starting_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            ending_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            class_type: "Cours Magistral".to_string(),
            class_type_en: Some("Lecture".to_string()),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn times(mut self, starting_time: NaiveTime, ending_time: NaiveTime) -> Self {
        self.starting_time = starting_time;
        self.ending_time = ending_time;
        self
    }

    pub fn class_type(mut self, class_type: impl Into<String>) -> Self {
        self.class_type = class_type.into();
        self
    }

    pub fn class_type_en(mut self, class_type_en: Option<String>) -> Self {
        self.class_type_en = class_type_en;
        self
    }

    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            date: ActiveValue::Set(self.date),
            starting_time: ActiveValue::Set(self.starting_time),
            ending_time: ActiveValue::Set(self.ending_time),
            class_type: ActiveValue::Set(self.class_type),
            class_type_en: ActiveValue::Set(self.class_type_en),
            course_id: ActiveValue::Set(self.course_id),
            room_id: ActiveValue::Set(self.room_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_class(
    db: &DatabaseConnection,
    course_id: i32,
    room_id: i32,
) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db, course_id, room_id).build().await
}

/// Assigns `professor_id` to teach `class_id`.
pub async fn add_professor_to_class(
    db: &DatabaseConnection,
    class_id: i32,
    professor_id: i32,
) -> Result<entity::class_professor::Model, DbErr> {
    entity::class_professor::ActiveModel {
        class_id: ActiveValue::Set(class_id),
        professor_id: ActiveValue::Set(professor_id),
    }
    .insert(db)
    .await
}
