//! Database repository layer.
//!
//! One repository per aggregate. Repositories run SeaORM queries and convert
//! entity models into domain models before returning, so nothing above this
//! layer touches entity types except the `*WithRelations` bundles. Repositories
//! that take part in multi-row writes are generic over `ConnectionTrait` so the
//! service can hand them a transaction.

pub mod absence;
pub mod class;
pub mod course;
pub mod group;
pub mod home;
pub mod professor;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
