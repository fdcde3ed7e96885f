pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_group_table;
mod m20250901_000003_create_user_group_table;
mod m20250901_000004_create_course_table;
mod m20250901_000005_create_group_course_table;
mod m20250901_000006_create_room_table;
mod m20250901_000007_create_professor_table;
mod m20250901_000008_create_class_table;
mod m20250901_000009_create_class_professor_table;
mod m20250905_000010_create_absence_table;
mod m20250912_000011_create_card_table;
mod m20250912_000012_create_card_content_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_group_table::Migration),
            Box::new(m20250901_000003_create_user_group_table::Migration),
            Box::new(m20250901_000004_create_course_table::Migration),
            Box::new(m20250901_000005_create_group_course_table::Migration),
            Box::new(m20250901_000006_create_room_table::Migration),
            Box::new(m20250901_000007_create_professor_table::Migration),
            Box::new(m20250901_000008_create_class_table::Migration),
            Box::new(m20250901_000009_create_class_professor_table::Migration),
            Box::new(m20250905_000010_create_absence_table::Migration),
            Box::new(m20250912_000011_create_card_table::Migration),
            Box::new(m20250912_000012_create_card_content_table::Migration),
        ]
    }
}
