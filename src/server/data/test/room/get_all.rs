use super::*;

/// Tests listing rooms.
///
/// Expected: Ok(Vec<Room>) sorted by name regardless of insertion order
#[tokio::test]
async fn lists_rooms_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room_named(db, "Salle 201").await?;
    factory::room::create_room_named(db, "Amphi A").await?;
    factory::room::create_room_named(db, "Salle 101").await?;

    let rooms = RoomRepository::new(db).get_all().await?;

    let names: Vec<&str> = rooms.iter().map(|room| room.name.as_str()).collect();
    assert_eq!(names, vec!["Amphi A", "Salle 101", "Salle 201"]);

    Ok(())
}
