//! Wire types exchanged with API clients.
//!
//! These DTOs describe the JSON bodies of every endpoint. They carry no
//! behaviour; the server converts its domain models into them at the controller
//! boundary.

pub mod absence;
pub mod api;
pub mod auth;
pub mod class;
pub mod directory;
pub mod home;
pub mod user;
