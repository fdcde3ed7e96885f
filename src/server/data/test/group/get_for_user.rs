use super::*;

/// Tests listing the groups of a user.
///
/// Verifies that only the groups the user is a member of are returned,
/// ordered by id.
///
/// Expected: Ok(Vec<Group>) with the two member groups
#[tokio::test]
async fn returns_member_groups_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_group(db).await?;
    let _other = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;
    factory::add_user_to_group(db, user.id, second.id).await?;
    factory::add_user_to_group(db, user.id, first.id).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.get_for_user(user.id).await?;

    let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing groups of a user without memberships.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.get_for_user(user.id).await?;

    assert!(groups.is_empty());

    Ok(())
}
