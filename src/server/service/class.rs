use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        class::ClassRepository, course::CourseRepository, group::GroupRepository,
        professor::ProfessorRepository, room::RoomRepository, user::UserRepository,
    },
    error::AppError,
    model::class::{Class, CreateClassParams},
};

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the timetable of a user: every class of every course followed by
    /// one of the user's groups.
    ///
    /// # Returns
    /// - `Ok(Vec<Class>)` - Classes sorted by date, start time and id
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn classes_for_user(&self, user_id: i32) -> Result<Vec<Class>, AppError> {
        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let group_ids: Vec<i32> = GroupRepository::new(self.db)
            .get_for_user(user_id)
            .await?
            .into_iter()
            .map(|group| group.id)
            .collect();

        self.classes_for_groups(&group_ids).await
    }

    /// Gets every class of every course followed by any of `group_ids`.
    pub async fn classes_for_groups(&self, group_ids: &[i32]) -> Result<Vec<Class>, AppError> {
        let course_ids = CourseRepository::new(self.db)
            .ids_for_groups(group_ids)
            .await?;

        Ok(ClassRepository::new(self.db)
            .get_by_course_ids(&course_ids)
            .await?)
    }

    /// Gets every class held in any of `room_ids`.
    pub async fn classes_for_rooms(&self, room_ids: &[i32]) -> Result<Vec<Class>, AppError> {
        Ok(ClassRepository::new(self.db)
            .get_by_room_ids(room_ids)
            .await?)
    }

    /// Schedules a class.
    ///
    /// The class and its professor links are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Class)` - The created class with all related data
    /// - `Err(AppError::BadRequest)` - Start time not before end time, or blank class type
    /// - `Err(AppError::NotFound)` - Course, room or a professor does not exist
    pub async fn add_class(&self, params: CreateClassParams) -> Result<Class, AppError> {
        if params.starting_time >= params.ending_time {
            return Err(AppError::BadRequest(
                "startingTime must be before endingTime".to_string(),
            ));
        }
        if params.class_type.is_empty() {
            return Err(AppError::BadRequest("classType is required".to_string()));
        }

        if CourseRepository::new(self.db)
            .find_by_id(params.course_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Course {} not found",
                params.course_id
            )));
        }
        if RoomRepository::new(self.db)
            .find_by_id(params.room_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Room {} not found", params.room_id)));
        }

        let professors = ProfessorRepository::new(self.db)
            .find_by_ids(&params.professor_ids)
            .await?;
        if let Some(missing) = params
            .professor_ids
            .iter()
            .find(|id| !professors.iter().any(|p| p.id == **id))
        {
            return Err(AppError::NotFound(format!("Professor {} not found", missing)));
        }

        let txn = self.db.begin().await?;
        let id = ClassRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!("Scheduled class {}", id);

        ClassRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Class {} missing after creation", id)))
    }
}
