use super::*;
use crate::server::{model::language::Language, service::directory::DirectoryService};

/// Tests the course listing in both languages.
///
/// Expected: Ok(Vec<Course>) in id order, English names only where present
#[tokio::test]
async fn lists_courses_localized_with_fallback() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .name("Algorithmique")
        .name_en("Algorithms")
        .build()
        .await?;
    factory::course::CourseFactory::new(db).name("Droit civil").build().await?;

    let courses = DirectoryService::new(db).courses().await?;

    let english: Vec<String> = courses
        .iter()
        .cloned()
        .map(|course| course.into_dto(Language::En).name)
        .collect();
    assert_eq!(english, vec!["Algorithms", "Droit civil"]);

    let french: Vec<String> = courses
        .into_iter()
        .map(|course| course.into_dto(Language::Fr).name)
        .collect();
    assert_eq!(french, vec!["Algorithmique", "Droit civil"]);

    Ok(())
}

/// Tests the room and professor listings.
///
/// Expected: Ok with both lists sorted by name
#[tokio::test]
async fn lists_rooms_and_professors_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room_named(db, "Salle B").await?;
    factory::room::create_room_named(db, "Salle A").await?;
    factory::professor::create_professor_named(db, "Zoé Martin").await?;
    factory::professor::create_professor_named(db, "Alain Roux").await?;

    let service = DirectoryService::new(db);
    let rooms = service.rooms().await?;
    let professors = service.professors().await?;

    assert_eq!(rooms[0].name, "Salle A");
    assert_eq!(rooms[1].name, "Salle B");
    assert_eq!(professors[0].name, "Alain Roux");
    assert_eq!(professors[1].name, "Zoé Martin");

    Ok(())
}
