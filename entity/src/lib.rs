//! SeaORM entity models for the campus portal schema.
//!
//! One module per table. Join tables (`user_group`, `group_course`,
//! `class_professor`) use composite primary keys and expose `via` relations so
//! both sides of each many-to-many association can be walked with `Related`.

pub mod prelude;

pub mod absence;
pub mod card;
pub mod card_content;
pub mod class;
pub mod class_professor;
pub mod course;
pub mod group;
pub mod group_course;
pub mod professor;
pub mod room;
pub mod user;
pub mod user_group;
