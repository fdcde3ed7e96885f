use super::*;

/// Tests adding a user to a group created through the repository.
///
/// Expected: Ok(()) and the group listed for the user
#[tokio::test]
async fn adds_user_to_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo.create("Informatique", Some("Computer Science")).await?;
    repo.add_member(group.id, user.id).await?;

    let groups = repo.get_for_user(user.id).await?;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Informatique");
    assert_eq!(groups[0].name_en.as_deref(), Some("Computer Science"));

    Ok(())
}

/// Tests adding the same membership twice.
///
/// Expected: Err(DbErr) from the composite primary key
#[tokio::test]
async fn fails_for_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    repo.add_member(group.id, user.id).await?;
    let result = repo.add_member(group.id, user.id).await;

    assert!(result.is_err());

    Ok(())
}
