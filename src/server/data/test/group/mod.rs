use crate::server::{data::group::GroupRepository, model::language::Language};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_member;
mod get_all;
mod get_for_user;
