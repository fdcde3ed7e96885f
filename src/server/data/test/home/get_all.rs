use super::*;

/// Tests listing cards.
///
/// Verifies that cards come back ordered by sort order then id, each with its
/// own content rows only.
///
/// Expected: Ok(Vec<Card>) in display order
#[tokio::test]
async fn lists_cards_in_display_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_home_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::card::CardFactory::new(db).sort_order(2).build().await?;
    let first = factory::card::CardFactory::new(db).sort_order(1).build().await?;
    let tie = factory::card::CardFactory::new(db).sort_order(2).build().await?;
    factory::create_card_content(db, first.id).await?;
    factory::create_card_content(db, second.id).await?;
    factory::create_card_content(db, second.id).await?;

    let repo = HomeRepository::new(db);
    let cards = repo.get_all().await?;

    let ids: Vec<i32> = cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id, tie.id]);
    assert_eq!(cards[0].contents.len(), 1);
    assert_eq!(cards[1].contents.len(), 2);
    assert!(cards[2].contents.is_empty());

    Ok(())
}

/// Tests listing cards on an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_home_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HomeRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
