//! Group factory and membership helper.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    name_en: Option<String>,
}

impl<'a> GroupFactory<'a> {
    /// Defaults to name `"Groupe {id}"` without an English name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Groupe {}", id),
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

    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            name: ActiveValue::Set(self.name),
            name_en: ActiveValue::Set(self.name_en),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}

/// Makes `user_id` a member of `group_id`.
pub async fn add_user_to_group(
    db: &DatabaseConnection,
    user_id: i32,
    group_id: i32,
) -> Result<entity::user_group::Model, DbErr> {
    entity::user_group::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}
