use super::*;

/// Tests looking up a room by id.
///
/// Expected: Ok(Some(Room)) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_existing_room_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let repo = RoomRepository::new(db);

    let found = repo.find_by_id(room.id).await?;
    assert_eq!(found.map(|r| r.name), Some(room.name));

    assert!(repo.find_by_id(room.id + 1).await?.is_none());

    Ok(())
}
