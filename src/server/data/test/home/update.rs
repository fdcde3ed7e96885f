use super::*;

/// Tests replacing a card and its tree.
///
/// Verifies that card fields change and that old content rows are replaced
/// rather than appended to.
///
/// Expected: Ok(true) and only the new rows stored
#[tokio::test]
async fn replaces_fields_and_contents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_home_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_card(db).await?;
    let parent = factory::create_card_content(db, existing.id).await?;
    factory::card::CardContentFactory::new(db, existing.id)
        .parent_id(parent.id)
        .build()
        .await?;

    let repo = HomeRepository::new(db);
    let mut params = card("Emploi du temps", vec![content("text", 0, Vec::new())]);
    params.title_en = Some("Timetable".to_string());
    let updated = repo.update(existing.id, params).await?;

    assert!(updated);
    let stored = repo.get_by_id(existing.id).await?.unwrap();
    assert_eq!(stored.title, "Emploi du temps");
    assert_eq!(stored.title_en.as_deref(), Some("Timetable"));
    assert_eq!(stored.contents.len(), 1);
    assert!(stored.contents[0].children.is_empty());
    assert_eq!(entity::prelude::CardContent::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating a card that does not exist.
///
/// Expected: Ok(false) and nothing written
#[tokio::test]
async fn returns_false_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_home_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HomeRepository::new(db);
    let updated = repo
        .update(12, card("Absent", vec![content("text", 0, Vec::new())]))
        .await?;

    assert!(!updated);
    assert_eq!(entity::prelude::CardContent::find().count(db).await?, 0);

    Ok(())
}
