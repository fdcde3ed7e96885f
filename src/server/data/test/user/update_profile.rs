use super::*;

/// Tests updating names and email of a user.
///
/// Expected: Ok(Some(User)) carrying the new values
#[tokio::test]
async fn updates_names_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            entity.id,
            UpdateProfileParams {
                first_name: "Alice".to_string(),
                last_name: "Wonder".to_string(),
                email: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Alice");
    assert_eq!(updated.last_name, "Wonder");
    assert!(updated.email.is_none());
    assert_eq!(updated.username, entity.username);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(
            42,
            UpdateProfileParams {
                first_name: "Alice".to_string(),
                last_name: "Wonder".to_string(),
                email: Some("alice@example.com".to_string()),
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
