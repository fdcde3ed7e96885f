//! Course data repository, including the courses each group follows.

use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::directory::Course;

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all courses ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let entities = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Distinct ids of the courses followed by any of `group_ids`, ascending.
    pub async fn ids_for_groups(&self, group_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let links = entity::prelude::GroupCourse::find()
            .filter(entity::group_course::Column::GroupId.is_in(group_ids.to_vec()))
            .all(self.db)
            .await?;

        let ids: BTreeSet<i32> = links.into_iter().map(|link| link.course_id).collect();

        Ok(ids.into_iter().collect())
    }

    /// Inserts a course and enrols the given groups in it.
    pub async fn create(
        &self,
        name: &str,
        name_en: Option<&str>,
        group_ids: &[i32],
    ) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            name_en: ActiveValue::Set(name_en.map(str::to_string)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for group_id in group_ids {
            entity::group_course::ActiveModel {
                group_id: ActiveValue::Set(*group_id),
                course_id: ActiveValue::Set(entity.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(Course::from_entity(entity))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find().count(self.db).await
    }
}
