use super::*;

/// Tests creating a card with a nested content tree.
///
/// Verifies that every level of the tree is stored and rebuilt with the same
/// shape and sibling order.
///
/// Expected: Ok(i32) id of a card whose tree matches the input
#[tokio::test]
async fn creates_card_with_nested_contents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_home_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HomeRepository::new(db);
    let id = repo
        .create(card(
            "Bienvenue",
            vec![
                content(
                    "list",
                    0,
                    vec![
                        content("item", 1, vec![content("link", 0, Vec::new())]),
                        content("item", 0, Vec::new()),
                    ],
                ),
                content("text", 1, Vec::new()),
            ],
        ))
        .await?;

    let stored = repo.get_by_id(id).await?.unwrap();
    assert_eq!(stored.title, "Bienvenue");
    assert_eq!(stored.contents.len(), 2);
    assert_eq!(stored.contents[0].content_type, "list");
    assert_eq!(stored.contents[1].content_type, "text");

    let items = &stored.contents[0].children;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].sort_order, 0);
    assert_eq!(items[1].sort_order, 1);
    assert_eq!(items[1].children[0].content_type, "link");

    assert_eq!(entity::prelude::CardContent::find().count(db).await?, 5);

    Ok(())
}

/// Tests creating a card without contents.
///
/// Expected: Ok(i32) id of a card with an empty tree
#[tokio::test]
async fn creates_empty_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_home_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HomeRepository::new(db);
    let id = repo.create(card("Annonces", Vec::new())).await?;

    let stored = repo.get_by_id(id).await?.unwrap();
    assert!(stored.contents.is_empty());
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
