use super::*;

/// Tests resolving the courses followed by several groups.
///
/// Verifies that a course shared by both groups is returned once and that
/// courses of other groups are excluded.
///
/// Expected: Ok(Vec<i32>) with distinct ascending ids
#[tokio::test]
async fn returns_distinct_course_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group_a = factory::create_group(db).await?;
    let group_b = factory::create_group(db).await?;
    let group_c = factory::create_group(db).await?;
    let shared = factory::create_course(db).await?;
    let only_b = factory::create_course(db).await?;
    let only_c = factory::create_course(db).await?;
    factory::add_course_to_group(db, group_a.id, shared.id).await?;
    factory::add_course_to_group(db, group_b.id, shared.id).await?;
    factory::add_course_to_group(db, group_b.id, only_b.id).await?;
    factory::add_course_to_group(db, group_c.id, only_c.id).await?;

    let repo = CourseRepository::new(db);
    let ids = repo.ids_for_groups(&[group_b.id, group_a.id]).await?;

    assert_eq!(ids, vec![shared.id, only_b.id]);

    Ok(())
}

/// Tests resolving courses for an empty group list.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_no_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let ids = repo.ids_for_groups(&[]).await?;

    assert!(ids.is_empty());

    Ok(())
}
