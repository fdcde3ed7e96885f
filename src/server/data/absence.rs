//! Absence data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::absence::{Absence, AbsenceStatus, CreateAbsenceParams};

pub struct AbsenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AbsenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every absence with its owner's username, newest first.
    pub async fn get_all(&self) -> Result<Vec<Absence>, DbErr> {
        let rows = entity::prelude::Absence::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::absence::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(absence, user)| {
                let username = user.map(|u| u.username).unwrap_or_default();
                Absence::from_entity(absence, username)
            })
            .collect()
    }

    /// Gets the absences of one user, newest first.
    pub async fn get_by_user(&self, user_id: i32, username: &str) -> Result<Vec<Absence>, DbErr> {
        let entities = entity::prelude::Absence::find()
            .filter(entity::absence::Column::UserId.eq(user_id))
            .order_by_desc(entity::absence::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|absence| Absence::from_entity(absence, username.to_string()))
            .collect()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Absence>, DbErr> {
        let row = entity::prelude::Absence::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        row.map(|(absence, user)| {
            let username = user.map(|u| u.username).unwrap_or_default();
            Absence::from_entity(absence, username)
        })
        .transpose()
    }

    /// Inserts a pending absence for `params.user_id`.
    pub async fn create(
        &self,
        params: CreateAbsenceParams,
        username: &str,
    ) -> Result<Absence, DbErr> {
        let entity = entity::absence::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            reason: ActiveValue::Set(params.reason),
            additional_info: ActiveValue::Set(params.additional_info),
            status: ActiveValue::Set(AbsenceStatus::Pending.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Absence::from_entity(entity, username.to_string())
    }

    /// Sets the review status of an absence.
    ///
    /// # Returns
    /// - `Ok(Some(Absence))` - The updated absence
    /// - `Ok(None)` - No absence with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: AbsenceStatus,
    ) -> Result<Option<Absence>, DbErr> {
        let Some(existing) = entity::prelude::Absence::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::absence::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.update(self.db).await?;

        self.find_by_id(id).await
    }
}
