use crate::server::{
    data::absence::AbsenceRepository,
    model::absence::{AbsenceStatus, CreateAbsenceParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update_status;
