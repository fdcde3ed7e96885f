use crate::server::data::course::CourseRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod ids_for_groups;
