use super::*;

/// Tests listing all groups with English names.
///
/// Verifies groups come back in id order and that a group without an English
/// name falls back to its base name.
///
/// Expected: Ok(Vec<Group>) localized as ["Computer Science", "Droit"]
#[tokio::test]
async fn lists_groups_in_id_order_with_english_fallback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::group::GroupFactory::new(db)
        .name("Informatique")
        .name_en("Computer Science")
        .build()
        .await?;
    factory::group::GroupFactory::new(db).name("Droit").build().await?;

    let groups = GroupRepository::new(db).get_all().await?;

    let names: Vec<String> = groups
        .into_iter()
        .map(|group| group.into_dto(Language::En).name)
        .collect();
    assert_eq!(names, vec!["Computer Science", "Droit"]);

    Ok(())
}

/// Tests listing groups on an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let groups = GroupRepository::new(db).get_all().await?;

    assert!(groups.is_empty());

    Ok(())
}
