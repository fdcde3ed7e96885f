use super::*;

/// Tests listing professors.
///
/// Expected: Ok(Vec<Professor>) sorted by name
#[tokio::test]
async fn lists_professors_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::professor::create_professor_named(db, "Pierre Dupont").await?;
    factory::professor::create_professor_named(db, "Marie Curie").await?;

    let professors = ProfessorRepository::new(db).get_all().await?;

    let names: Vec<&str> = professors.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Marie Curie", "Pierre Dupont"]);

    Ok(())
}
