use super::*;

fn params(username: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        password_hash: "hash".to_string(),
        first_name: "Jean".to_string(),
        last_name: "Dupont".to_string(),
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository stores the given fields and leaves the email
/// empty.
///
/// Expected: Ok(User) with the stored fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("jean.dupont")).await?;

    assert_eq!(user.username, "jean.dupont");
    assert_eq!(user.first_name, "Jean");
    assert_eq!(user.last_name, "Dupont");
    assert!(user.email.is_none());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests creating a user whose username is taken.
///
/// Verifies that the unique index rejects the second insert with a unique
/// constraint violation and no second row is written.
///
/// Expected: Err(DbErr) with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("jean.dupont")).await?;

    let result = repo.create(params("jean.dupont")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that factory-created users are visible through the repository.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_created_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(entity.id).await?;

    assert_eq!(user.map(|u| u.username), Some(entity.username));
    assert!(repo.find_by_id(entity.id + 100).await?.is_none());

    Ok(())
}
