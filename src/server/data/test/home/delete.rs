use super::*;

/// Tests deleting a card.
///
/// Verifies that every content row of the card, at any depth, is removed
/// while other cards keep theirs.
///
/// Expected: Ok(true) and no rows left for the deleted card
#[tokio::test]
async fn deletes_card_and_all_descendants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_home_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HomeRepository::new(db);
    let doomed = repo
        .create(card(
            "Ancienne",
            vec![content(
                "list",
                0,
                vec![content("item", 0, vec![content("link", 0, Vec::new())])],
            )],
        ))
        .await?;
    let kept = repo
        .create(card("Actuelle", vec![content("text", 0, Vec::new())]))
        .await?;

    let deleted = repo.delete(doomed).await?;

    assert!(deleted);
    assert!(repo.get_by_id(doomed).await?.is_none());
    assert_eq!(entity::prelude::CardContent::find().count(db).await?, 1);
    assert_eq!(repo.get_by_id(kept).await?.unwrap().contents.len(), 1);

    Ok(())
}

/// Tests deleting a card that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_home_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HomeRepository::new(db);

    assert!(!repo.delete(3).await?);

    Ok(())
}
