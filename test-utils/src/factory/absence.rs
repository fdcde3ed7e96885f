//! Absence factory.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for absence declarations.
///
/// Defaults to a pending one-day absence on 2025-09-15 for illness.
pub struct AbsenceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: String,
    additional_info: Option<String>,
    status: String,
}

impl<'a> AbsenceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let day = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        Self {
            db,
            user_id,
            start_date: day,
            end_date: day,
            reason: "Maladie".to_string(),
            additional_info: None,
            status: "pending".to_string(),
        }
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn additional_info(mut self, additional_info: impl Into<String>) -> Self {
        self.additional_info = Some(additional_info.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::absence::Model, DbErr> {
        entity::absence::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            reason: ActiveValue::Set(self.reason),
            additional_info: ActiveValue::Set(self.additional_info),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_absence(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::absence::Model, DbErr> {
    AbsenceFactory::new(db, user_id).build().await
}
