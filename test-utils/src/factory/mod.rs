//! Factories for test data.
//!
//! Each entity gets a `XFactory` builder with sensible defaults plus a
//! `create_x` shorthand. Defaults draw on a shared counter so that unique
//! columns such as usernames or room names never collide within a test.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let group = factory::group::GroupFactory::new(db)
//!     .name("Groupe A")
//!     .name_en("Group A")
//!     .build()
//!     .await?;
//! factory::add_user_to_group(db, user.id, group.id).await?;
//! ```

pub mod absence;
pub mod card;
pub mod class;
pub mod course;
pub mod group;
pub mod helpers;
pub mod professor;
pub mod room;
pub mod user;

pub use absence::create_absence;
pub use card::{create_card, create_card_content};
pub use class::{add_professor_to_class, create_class};
pub use course::{add_course_to_group, create_course};
pub use group::{add_user_to_group, create_group};
pub use professor::create_professor;
pub use room::create_room;
pub use user::create_user;
