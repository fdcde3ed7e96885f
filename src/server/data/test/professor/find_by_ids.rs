use super::*;

/// Tests bulk lookup of professors.
///
/// Verifies results are in id order and unknown ids are skipped.
///
/// Expected: Ok(Vec<Professor>) with the two existing professors
#[tokio::test]
async fn returns_existing_professors_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_professor(db).await?;
    let second = factory::create_professor(db).await?;

    let repo = ProfessorRepository::new(db);
    let professors = repo.find_by_ids(&[second.id, 999, first.id]).await?;

    let ids: Vec<i32> = professors.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests bulk lookup with no ids.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_empty_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_professor(db).await?;

    let professors = ProfessorRepository::new(db).find_by_ids(&[]).await?;

    assert!(professors.is_empty());

    Ok(())
}
