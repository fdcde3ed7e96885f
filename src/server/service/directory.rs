//! Read-only listings of groups, rooms, courses and professors.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository, group::GroupRepository, professor::ProfessorRepository,
        room::RoomRepository,
    },
    error::AppError,
    model::directory::{Course, Group, Professor, Room},
};

pub struct DirectoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DirectoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn groups(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    pub async fn rooms(&self) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).get_all().await?)
    }

    pub async fn courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_all().await?)
    }

    pub async fn professors(&self) -> Result<Vec<Professor>, AppError> {
        Ok(ProfessorRepository::new(self.db).get_all().await?)
    }
}
