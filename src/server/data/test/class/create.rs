use super::*;

/// Tests creating a class with professors.
///
/// Verifies that the class and its professor links are stored and that the
/// aggregated class lists the professors in id order.
///
/// Expected: Ok(i32) id of a class with both professors
#[tokio::test]
async fn creates_class_with_professors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let room = factory::create_room(db).await?;
    let turing = factory::professor::create_professor_named(db, "Alan Turing").await?;
    let hopper = factory::professor::create_professor_named(db, "Grace Hopper").await?;

    let repo = ClassRepository::new(db);
    let id = repo
        .create(CreateClassParams {
            date: date(3),
            starting_time: time(16, 0),
            ending_time: time(17, 30),
            class_type: "Travaux Dirigés".to_string(),
            class_type_en: Some("Tutorial".to_string()),
            course_id: course.id,
            room_id: room.id,
            professor_ids: vec![hopper.id, turing.id],
        })
        .await?;

    let class = repo.get_by_id(id).await?.unwrap();
    assert_eq!(class.date, date(3));
    assert_eq!(class.starting_time, time(16, 0));
    assert_eq!(class.class_type, "Travaux Dirigés");
    let professors: Vec<i32> = class.professors.iter().map(|p| p.id).collect();
    assert_eq!(professors, vec![turing.id, hopper.id]);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests creating a class for a course that does not exist.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;

    let repo = ClassRepository::new(db);
    let result = repo
        .create(CreateClassParams {
            date: date(3),
            starting_time: time(9, 0),
            ending_time: time(10, 30),
            class_type: "Cours Magistral".to_string(),
            class_type_en: None,
            course_id: 999,
            room_id: room.id,
            professor_ids: Vec::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
