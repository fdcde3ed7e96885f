use super::*;

/// Tests filtering classes by room.
///
/// Expected: Ok(Vec<Class>) with only the classes held in the requested rooms
#[tokio::test]
async fn returns_classes_in_requested_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let room_a = factory::create_room(db).await?;
    let room_b = factory::create_room(db).await?;
    let room_c = factory::create_room(db).await?;
    let in_a = factory::create_class(db, course.id, room_a.id).await?;
    let in_b = ClassFactory::new(db, course.id, room_b.id)
        .times(time(11, 0), time(12, 30))
        .build()
        .await?;
    factory::create_class(db, course.id, room_c.id).await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_room_ids(&[room_a.id, room_b.id]).await?;

    let ids: Vec<i32> = classes.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![in_a.id, in_b.id]);

    Ok(())
}

/// Tests filtering by a room without classes.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unused_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_schedule_for_user(db).await?;
    let unused = factory::create_room(db).await?;

    let repo = ClassRepository::new(db);
    let classes = repo.get_by_room_ids(&[unused.id]).await?;

    assert!(classes.is_empty());

    Ok(())
}
