use super::*;

/// Tests aggregating a class with all its related rows.
///
/// Verifies that course, room, professor, group and attendee data are
/// attached to the class.
///
/// Expected: Ok(Vec<Class>) with one fully populated class
#[tokio::test]
async fn aggregates_related_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group, course, room, professor, class) = create_schedule_for_user(db).await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_course_ids(&[course.id]).await?;

    assert_eq!(classes.len(), 1);
    let result = &classes[0];
    assert_eq!(result.id, class.id);
    assert_eq!(result.course.id, course.id);
    assert_eq!(result.room.name, room.name);
    assert_eq!(result.professors.len(), 1);
    assert_eq!(result.professors[0].id, professor.id);
    assert_eq!(result.groups.len(), 1);
    assert_eq!(result.groups[0].id, group.id);
    assert_eq!(result.attendees.len(), 1);
    assert_eq!(result.attendees[0].username, user.username);

    Ok(())
}

/// Tests attendee de-duplication across groups.
///
/// Verifies that a user belonging to two groups that both follow the course
/// appears once in the attendee list while both groups are listed.
///
/// Expected: Ok(Vec<Class>) with two groups and two distinct attendees
#[tokio::test]
async fn deduplicates_attendees_from_shared_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shared_user = factory::create_user(db).await?;
    let other_user = factory::create_user(db).await?;
    let group_a = factory::create_group(db).await?;
    let group_b = factory::create_group(db).await?;
    factory::add_user_to_group(db, shared_user.id, group_a.id).await?;
    factory::add_user_to_group(db, shared_user.id, group_b.id).await?;
    factory::add_user_to_group(db, other_user.id, group_b.id).await?;

    let course = factory::create_course(db).await?;
    factory::add_course_to_group(db, group_a.id, course.id).await?;
    factory::add_course_to_group(db, group_b.id, course.id).await?;
    let room = factory::create_room(db).await?;
    factory::create_class(db, course.id, room.id).await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_course_ids(&[course.id]).await?;

    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].groups.len(), 2);
    let attendees: Vec<i32> = classes[0].attendees.iter().map(|a| a.user_id).collect();
    assert_eq!(attendees, vec![shared_user.id, other_user.id]);

    Ok(())
}

/// Tests ordering of classes.
///
/// Verifies that classes come back sorted by date, then start time, then id,
/// regardless of insertion order.
///
/// Expected: Ok(Vec<Class>) in chronological order
#[tokio::test]
async fn orders_by_date_then_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let room = factory::create_room(db).await?;
    let late = ClassFactory::new(db, course.id, room.id)
        .date(date(2))
        .times(time(9, 0), time(10, 30))
        .build()
        .await?;
    let afternoon = ClassFactory::new(db, course.id, room.id)
        .date(date(1))
        .times(time(14, 0), time(15, 30))
        .build()
        .await?;
    let morning = ClassFactory::new(db, course.id, room.id)
        .date(date(1))
        .times(time(9, 0), time(10, 30))
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_course_ids(&[course.id]).await?;

    let ids: Vec<i32> = classes.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![morning.id, afternoon.id, late.id]);

    Ok(())
}

/// Tests a class whose course no group follows.
///
/// Expected: Ok(Vec<Class>) with empty groups and attendees
#[tokio::test]
async fn returns_empty_attendees_without_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let room = factory::create_room(db).await?;
    factory::create_class(db, course.id, room.id).await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_course_ids(&[course.id]).await?;

    assert_eq!(classes.len(), 1);
    assert!(classes[0].groups.is_empty());
    assert!(classes[0].attendees.is_empty());
    assert!(classes[0].professors.is_empty());

    Ok(())
}

/// Tests querying with no course ids.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_no_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_schedule_for_user(db).await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_course_ids(&[]).await?;

    assert!(classes.is_empty());

    Ok(())
}
