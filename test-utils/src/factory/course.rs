//! Course factory and group enrolment helper.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    name_en: Option<String>,
}

impl<'a> CourseFactory<'a> {
    /// Defaults to name `"Cours {id}"` without an English name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Cours {}", id),
            name_en: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            name: ActiveValue::Set(self.name),
            name_en: ActiveValue::Set(self.name_en),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}

/// Enrols `group_id` in `course_id`.
pub async fn add_course_to_group(
    db: &DatabaseConnection,
    group_id: i32,
    course_id: i32,
) -> Result<entity::group_course::Model, DbErr> {
    entity::group_course::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        course_id: ActiveValue::Set(course_id),
    }
    .insert(db)
    .await
}
