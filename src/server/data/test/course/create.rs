use super::*;

/// Tests creating a course linked to groups.
///
/// Expected: Ok(Course) and the course reachable from each linked group
#[tokio::test]
async fn creates_course_with_group_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let maths = factory::create_group(db).await?;
    let physics = factory::create_group(db).await?;

    let repo = CourseRepository::new(db);
    let course = repo
        .create("Calcul", Some("Calculus"), &[maths.id, physics.id])
        .await?;

    assert_eq!(course.name, "Calcul");
    assert_eq!(repo.ids_for_groups(&[maths.id]).await?, vec![course.id]);
    assert_eq!(repo.ids_for_groups(&[physics.id]).await?, vec![course.id]);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
