use super::*;

/// Tests fetching a single class.
///
/// Expected: Ok(Some(Class)) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_existing_class_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, course, _, _, class) = create_schedule_for_user(db).await?;

    let repo = ClassRepository::new(db);
    let found = repo.get_by_id(class.id).await?;

    assert_eq!(found.as_ref().map(|c| c.id), Some(class.id));
    assert_eq!(found.map(|c| c.course.id), Some(course.id));
    assert!(repo.get_by_id(class.id + 1).await?.is_none());

    Ok(())
}
