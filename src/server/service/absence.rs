use sea_orm::DatabaseConnection;

use crate::server::{
    data::{absence::AbsenceRepository, user::UserRepository},
    error::AppError,
    model::absence::{Absence, AbsenceStatus, CreateAbsenceParams},
};

pub struct AbsenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AbsenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all absences, newest first.
    pub async fn get_all(&self) -> Result<Vec<Absence>, AppError> {
        Ok(AbsenceRepository::new(self.db).get_all().await?)
    }

    /// Gets the absences declared by a user.
    ///
    /// # Returns
    /// - `Ok(Vec<Absence>)` - The user's absences, newest first
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Absence>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        Ok(AbsenceRepository::new(self.db)
            .get_by_user(user.id, &user.username)
            .await?)
    }

    /// Declares a pending absence for the user in `params`.
    ///
    /// # Returns
    /// - `Ok(Absence)` - Created absence
    /// - `Err(AppError::BadRequest)` - Start after end, or blank reason
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn create(&self, params: CreateAbsenceParams) -> Result<Absence, AppError> {
        if params.start_date > params.end_date {
            return Err(AppError::BadRequest(
                "startDate must not be after endDate".to_string(),
            ));
        }
        if params.reason.is_empty() {
            return Err(AppError::BadRequest("reason is required".to_string()));
        }

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(params.user_id)
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let absence = AbsenceRepository::new(self.db)
            .create(params, &user.username)
            .await?;

        tracing::info!("User {} declared absence {}", user.username, absence.id);

        Ok(absence)
    }

    /// Sets the review status of an absence.
    ///
    /// # Returns
    /// - `Ok(Absence)` - Updated absence
    /// - `Err(AppError::NotFound)` - Absence does not exist
    pub async fn update_status(&self, id: i32, status: AbsenceStatus) -> Result<Absence, AppError> {
        AbsenceRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Absence {} not found", id)))
    }
}
