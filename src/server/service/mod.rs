//! Service layer between controllers and repositories.
//!
//! Services validate input, enforce business rules, orchestrate repository
//! calls and own transactions. They work on domain models and return
//! `AppError`, leaving DTO conversion and language selection to controllers.

pub mod absence;
pub mod auth;
pub mod class;
pub mod directory;
pub mod home;
pub mod user;

#[cfg(test)]
mod test;
