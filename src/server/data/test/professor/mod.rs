use crate::server::data::professor::ProfessorRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_ids;
mod get_all;
