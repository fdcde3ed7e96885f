//! Demo data loaded on startup.
//!
//! Each table group is filled only while it is empty, so restarting the server
//! never duplicates rows and hand-entered data is left alone.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        class::ClassRepository, course::CourseRepository, group::GroupRepository,
        professor::ProfessorRepository, room::RoomRepository, user::UserRepository,
    },
    error::AppError,
    model::{class::CreateClassParams, user::CreateUserParams},
    service::auth::password,
};

const GROUPS: [(&str, &str); 5] = [
    ("Informatique", "Computer Science"),
    ("Génie Civil", "Civil Engineering"),
    ("Droit", "Law"),
    ("Mathématiques", "Mathematics"),
    ("Physique", "Physics"),
];

struct SeedUser {
    username: &'static str,
    password: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    groups: &'static [&'static str],
}

const USERS: [SeedUser; 8] = [
    SeedUser {
        username: "john.doe",
        password: "password123",
        first_name: "John",
        last_name: "Doe",
        groups: &["Informatique", "Génie Civil"],
    },
    SeedUser {
        username: "jane.smith",
        password: "password123",
        first_name: "Jane",
        last_name: "Smith",
        groups: &["Informatique", "Droit"],
    },
    SeedUser {
        username: "amo",
        password: "riz",
        first_name: "Amo",
        last_name: "Riz",
        groups: &["Informatique", "Droit"],
    },
    SeedUser {
        username: "alice.wonder",
        password: "alicepwd",
        first_name: "Alice",
        last_name: "Wonder",
        groups: &["Mathématiques", "Physique"],
    },
    SeedUser {
        username: "bob.builder",
        password: "buildit",
        first_name: "Bob",
        last_name: "Builder",
        groups: &["Génie Civil", "Mathématiques"],
    },
    SeedUser {
        username: "carol.white",
        password: "carolpwd",
        first_name: "Carol",
        last_name: "White",
        groups: &["Droit", "Physique"],
    },
    SeedUser {
        username: "dave.green",
        password: "davepwd",
        first_name: "Dave",
        last_name: "Green",
        groups: &["Informatique", "Mathématiques"],
    },
    SeedUser {
        username: "eve.black",
        password: "evepwd",
        first_name: "Eve",
        last_name: "Black",
        groups: &["Génie Civil", "Physique"],
    },
];

const COURSES: [(&str, &str, &[&str]); 7] = [
    ("Programmation Web", "Web Programming", &["Informatique"]),
    ("Thermodynamique", "Thermodynamics", &["Génie Civil"]),
    ("Calcul", "Calculus", &["Mathématiques", "Physique"]),
    ("Physique Quantique", "Quantum Physics", &["Physique"]),
    ("Droit International", "International Law", &["Droit"]),
    ("Algèbre Linéaire", "Linear Algebra", &["Mathématiques"]),
    ("Architecture Informatique", "Computer Architecture", &["Informatique"]),
];

const PROFESSORS: [&str; 8] = [
    "John Smith",
    "Jane Doe",
    "Albert Newton",
    "Marie Curie",
    "Isaac Einstein",
    "Grace Hopper",
    "Alan Turing",
    "Ada Lovelace",
];

const ROOMS: [&str; 6] = ["D101", "E102", "B201", "C201", "A301", "F401"];

const DAY_SLOTS: [(&str, &str); 4] = [
    ("09:00", "10:30"),
    ("11:00", "12:30"),
    ("14:00", "15:30"),
    ("16:00", "17:30"),
];

const EVENING_SLOTS: [(&str, &str); 2] = [("18:00", "19:30"), ("20:00", "21:30")];

/// Seeds every empty table group in dependency order.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), AppError> {
    seed_groups(db).await?;
    seed_users(db).await?;
    seed_courses(db).await?;
    seed_professors(db).await?;
    seed_rooms(db).await?;
    seed_classes(db, Local::now().date_naive()).await?;

    Ok(())
}

async fn seed_groups(db: &DatabaseConnection) -> Result<(), AppError> {
    let repo = GroupRepository::new(db);
    if repo.count().await? > 0 {
        tracing::info!("Groups already seeded");
        return Ok(());
    }

    tracing::info!("Seeding groups");
    for (name, name_en) in GROUPS {
        repo.create(name, Some(name_en)).await?;
        tracing::debug!("Group '{}' added", name);
    }

    Ok(())
}

async fn seed_users(db: &DatabaseConnection) -> Result<(), AppError> {
    let repo = UserRepository::new(db);
    if repo.count().await? > 0 {
        tracing::info!("Users already seeded");
        return Ok(());
    }

    tracing::info!("Seeding users");
    let group_repo = GroupRepository::new(db);
    for seed in &USERS {
        let user = repo
            .create(CreateUserParams {
                username: seed.username.to_string(),
                password_hash: password::hash(seed.password)?,
                first_name: seed.first_name.to_string(),
                last_name: seed.last_name.to_string(),
            })
            .await?;

        for group_name in seed.groups {
            if let Some(group) = group_repo.find_by_name(group_name).await? {
                group_repo.add_member(group.id, user.id).await?;
            }
        }
        tracing::debug!("User '{}' added", user.username);
    }

    Ok(())
}

async fn seed_courses(db: &DatabaseConnection) -> Result<(), AppError> {
    let repo = CourseRepository::new(db);
    if repo.count().await? > 0 {
        tracing::info!("Courses already seeded");
        return Ok(());
    }

    tracing::info!("Seeding courses");
    let group_repo = GroupRepository::new(db);
    for (name, name_en, group_names) in COURSES {
        let mut group_ids = Vec::with_capacity(group_names.len());
        for group_name in group_names {
            if let Some(group) = group_repo.find_by_name(group_name).await? {
                group_ids.push(group.id);
            }
        }

        repo.create(name, Some(name_en), &group_ids).await?;
        tracing::debug!("Course '{}' added", name);
    }

    Ok(())
}

async fn seed_professors(db: &DatabaseConnection) -> Result<(), AppError> {
    let repo = ProfessorRepository::new(db);
    if repo.count().await? > 0 {
        tracing::info!("Professors already seeded");
        return Ok(());
    }

    tracing::info!("Seeding professors");
    for name in PROFESSORS {
        repo.create(name).await?;
    }

    Ok(())
}

async fn seed_rooms(db: &DatabaseConnection) -> Result<(), AppError> {
    let repo = RoomRepository::new(db);
    if repo.count().await? > 0 {
        tracing::info!("Rooms already seeded");
        return Ok(());
    }

    tracing::info!("Seeding rooms");
    for name in ROOMS {
        repo.create(name).await?;
    }

    Ok(())
}

/// Schedules the week containing `today`: four daytime and two evening
/// classes from Monday to Friday, with course, room and professor picked in
/// rotation.
async fn seed_classes(db: &DatabaseConnection, today: NaiveDate) -> Result<(), AppError> {
    let repo = ClassRepository::new(db);
    if repo.count().await? > 0 {
        tracing::info!("Classes already seeded");
        return Ok(());
    }

    let courses: Vec<i32> = CourseRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|course| course.id)
        .collect();
    let rooms = RoomRepository::new(db).ids().await?;
    let professors = ProfessorRepository::new(db).ids().await?;
    if courses.is_empty() || rooms.is_empty() || professors.is_empty() {
        tracing::warn!("Skipping class seeding, courses, rooms or professors are missing");
        return Ok(());
    }

    tracing::info!("Seeding classes");
    let sunday = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));

    for day in 1..=5usize {
        let date = sunday + Duration::days(day as i64);
        let slots = DAY_SLOTS
            .iter()
            .map(|slot| (slot, day))
            .chain(EVENING_SLOTS.iter().map(|slot| (slot, day * 2)));

        for (&(start, end), rotation) in slots {
            let index = rotation + slot_hash(start) as usize;
            let params = CreateClassParams {
                date,
                starting_time: seed_time(start)?,
                ending_time: seed_time(end)?,
                class_type: "Cours Magistral".to_string(),
                class_type_en: Some("Lecture".to_string()),
                course_id: courses[index % courses.len()],
                room_id: rooms[index % rooms.len()],
                professor_ids: vec![professors[index % professors.len()]],
            };

            let id = repo.create(params).await?;
            tracing::debug!("Class {} added on {} at {}", id, date, start);
        }
    }

    Ok(())
}

fn seed_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|err| AppError::InternalError(format!("Bad seed time '{}': {}", value, err)))
}

/// Absolute value of the 32-bit `h = 31 * h + c` string hash.
fn slot_hash(value: &str) -> u32 {
    value
        .encode_utf16()
        .fold(0i32, |hash, c| {
            hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(c))
        })
        .unsigned_abs()
}
