use super::*;

/// Tests approving an absence.
///
/// Expected: Ok(Some(Absence)) with status approved
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_absence_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let entity = factory::create_absence(db, user.id).await?;

    let repo = AbsenceRepository::new(db);
    let updated = repo
        .update_status(entity.id, AbsenceStatus::Approved)
        .await?
        .unwrap();

    assert_eq!(updated.status, AbsenceStatus::Approved);
    assert_eq!(updated.username, user.username);
    assert_eq!(
        repo.find_by_id(entity.id).await?.map(|a| a.status),
        Some(AbsenceStatus::Approved)
    );

    Ok(())
}

/// Tests updating the status of a missing absence.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_absence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_absence_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AbsenceRepository::new(db);
    let result = repo.update_status(7, AbsenceStatus::Rejected).await?;

    assert!(result.is_none());

    Ok(())
}
