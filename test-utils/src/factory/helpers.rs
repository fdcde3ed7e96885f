//! Shared helpers for the factory modules.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of the process-wide counter used to build unique defaults.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user who attends one class.
///
/// The user joins a fresh group, the group follows a fresh course, and a
/// class of that course is scheduled in a fresh room with one professor.
///
/// # Returns
/// - `Ok((user, group, course, room, professor, class))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_schedule_for_user(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::group::Model,
        entity::course::Model,
        entity::room::Model,
        entity::professor::Model,
        entity::class::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let group = crate::factory::group::create_group(db).await?;
    crate::factory::group::add_user_to_group(db, user.id, group.id).await?;

    let course = crate::factory::course::create_course(db).await?;
    crate::factory::course::add_course_to_group(db, group.id, course.id).await?;

    let room = crate::factory::room::create_room(db).await?;
    let professor = crate::factory::professor::create_professor(db).await?;
    let class = crate::factory::class::create_class(db, course.id, room.id).await?;
    crate::factory::class::add_professor_to_class(db, class.id, professor.id).await?;

    Ok((user, group, course, room, professor, class))
}
