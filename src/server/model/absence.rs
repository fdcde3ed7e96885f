//! Absence declarations and their review status.

use std::fmt;

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::absence::{AbsenceDto, CreateAbsenceDto},
    server::error::AppError,
};

/// Review state of an absence. Stored as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsenceStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl AbsenceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AbsenceStatus::Pending => "pending",
            AbsenceStatus::Approved => "approved",
            AbsenceStatus::Rejected => "rejected",
        }
    }

    /// Parses a status name case-insensitively.
    ///
    /// # Returns
    /// - `Ok(AbsenceStatus)` - Known status
    /// - `Err(AppError::BadRequest)` - Anything else
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(AbsenceStatus::Pending),
            "approved" => Ok(AbsenceStatus::Approved),
            "rejected" => Ok(AbsenceStatus::Rejected),
            _ => Err(AppError::BadRequest(format!(
                "Invalid absence status '{}', expected pending, approved or rejected",
                value
            ))),
        }
    }
}

impl fmt::Display for AbsenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Absence {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub additional_info: Option<String>,
    pub status: AbsenceStatus,
}

impl Absence {
    /// Converts an absence row and its owner's username.
    ///
    /// # Returns
    /// - `Ok(Absence)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known status name
    pub fn from_entity(entity: entity::absence::Model, username: String) -> Result<Self, DbErr> {
        let status = AbsenceStatus::parse(&entity.status).map_err(|_| {
            DbErr::Custom(format!(
                "Absence {} has unknown status '{}'",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            username,
            start_date: entity.start_date,
            end_date: entity.end_date,
            reason: entity.reason,
            additional_info: entity.additional_info,
            status,
        })
    }

    pub fn into_dto(self) -> AbsenceDto {
        AbsenceDto {
            id: self.id,
            username: self.username,
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
            additional_info: self.additional_info,
            status: self.status.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAbsenceParams {
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub additional_info: Option<String>,
}

impl CreateAbsenceParams {
    pub fn from_dto(user_id: i32, dto: CreateAbsenceDto) -> Self {
        Self {
            user_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            reason: dto.reason.trim().to_string(),
            additional_info: dto
                .additional_info
                .map(|info| info.trim().to_string())
                .filter(|info| !info.is_empty()),
        }
    }
}
