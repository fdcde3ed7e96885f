use super::*;

/// Tests finding a user by username.
///
/// Expected: Ok(Some(User)) for the matching user only
#[tokio::test]
async fn finds_matching_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("amo")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("amo").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().username, "amo");

    Ok(())
}

/// Tests looking up an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("nobody").await?;

    assert!(user.is_none());

    Ok(())
}
