use crate::server::{
    data::home::HomeRepository,
    model::home::{CardContentParams, CardParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn content(content_type: &str, order: i32, children: Vec<CardContentParams>) -> CardContentParams {
    CardContentParams {
        content_type: content_type.to_string(),
        content: Some(format!("{} {}", content_type, order)),
        content_en: None,
        url: None,
        css_class: None,
        sort_order: order,
        children,
    }
}

fn card(title: &str, contents: Vec<CardContentParams>) -> CardParams {
    CardParams {
        title: title.to_string(),
        title_en: None,
        css_class: Some("card-primary".to_string()),
        sort_order: 0,
        contents,
    }
}
