use super::*;

/// Tests listing every absence.
///
/// Verifies that absences of all users are returned newest first with the
/// owner's username.
///
/// Expected: Ok(Vec<Absence>) in descending id order
#[tokio::test]
async fn lists_all_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_absence_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let older = factory::create_absence(db, alice.id).await?;
    let newer = factory::create_absence(db, bob.id).await?;

    let repo = AbsenceRepository::new(db);
    let absences = repo.get_all().await?;

    assert_eq!(absences.len(), 2);
    assert_eq!(absences[0].id, newer.id);
    assert_eq!(absences[0].username, bob.username);
    assert_eq!(absences[1].id, older.id);
    assert_eq!(absences[1].username, alice.username);

    Ok(())
}

/// Tests listing the absences of one user.
///
/// Expected: Ok(Vec<Absence>) containing only that user's absences
#[tokio::test]
async fn lists_only_user_absences() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_absence_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let mine = factory::create_absence(db, alice.id).await?;
    factory::create_absence(db, bob.id).await?;

    let repo = AbsenceRepository::new(db);
    let absences = repo.get_by_user(alice.id, &alice.username).await?;

    assert_eq!(absences.len(), 1);
    assert_eq!(absences[0].id, mine.id);

    Ok(())
}

/// Tests a stored status that is not a known status name.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_absence_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::absence::AbsenceFactory::new(db, user.id)
        .status("lost")
        .build()
        .await?;

    let repo = AbsenceRepository::new(db);
    let result = repo.get_all().await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
