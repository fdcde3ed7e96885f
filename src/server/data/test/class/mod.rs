use crate::server::{data::class::ClassRepository, model::class::CreateClassParams};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, class::ClassFactory, helpers::create_schedule_for_user},
};

mod create;
mod get_by_course_ids;
mod get_by_id;
mod get_by_room_ids;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
}
