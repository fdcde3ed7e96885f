use super::*;

/// Tests declaring an absence.
///
/// Expected: Ok(Absence) in pending status with the given fields
#[tokio::test]
async fn creates_pending_absence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_absence_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = AbsenceRepository::new(db);
    let absence = repo
        .create(
            CreateAbsenceParams {
                user_id: user.id,
                start_date: NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 10, 8).unwrap(),
                reason: "Rendez-vous médical".to_string(),
                additional_info: Some("Certificat fourni".to_string()),
            },
            &user.username,
        )
        .await?;

    assert_eq!(absence.user_id, user.id);
    assert_eq!(absence.username, user.username);
    assert_eq!(absence.status, AbsenceStatus::Pending);
    assert_eq!(absence.additional_info.as_deref(), Some("Certificat fourni"));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
