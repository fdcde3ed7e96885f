use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of tables.
///
/// Tables are created in the order they are added, so referenced tables must
/// come before the tables holding foreign keys to them. The `with_*_tables`
/// helpers already respect that order.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_schedule_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the CREATE TABLE statement generated from `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Users, groups and their memberships.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(Group)
            .with_table(UserGroup)
    }

    /// Everything needed to build timetables: users and groups, courses,
    /// rooms, professors and classes with their join tables.
    pub fn with_schedule_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Course)
            .with_table(GroupCourse)
            .with_table(Room)
            .with_table(Professor)
            .with_table(Class)
            .with_table(ClassProfessor)
    }

    pub fn with_absence_tables(self) -> Self {
        self.with_table(User).with_table(Absence)
    }

    pub fn with_home_tables(self) -> Self {
        self.with_table(Card).with_table(CardContent)
    }

    /// Opens the in-memory database and creates the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
