//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary, services operate on them, and controllers turn them into wire DTOs
//! with `into_dto()`. Types that carry bilingual fields only pick a language
//! when converted to a DTO.

pub mod absence;
pub mod class;
pub mod directory;
pub mod home;
pub mod language;
pub mod user;
