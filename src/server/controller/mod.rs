//! HTTP handlers.
//!
//! Handlers authenticate the request, convert DTOs into domain parameters,
//! call a service and render the result in the request language.

pub mod absence;
pub mod auth;
pub mod class;
pub mod directory;
pub mod health;
pub mod home;
pub mod user;
