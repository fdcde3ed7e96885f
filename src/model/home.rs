use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Home card as displayed, with title and contents resolved to the request
/// language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: i32,
    pub title: String,
    pub css_class: Option<String>,
    pub order: i32,
    pub contents: Vec<CardContentDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardContentDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub content_type: String,
    pub content: Option<String>,
    pub url: Option<String>,
    pub css_class: Option<String>,
    pub order: i32,
    #[schema(no_recursion)]
    pub children: Vec<CardContentDto>,
}

/// Body of card create and update requests. English variants keep the
/// `_en` suffix used by existing clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardInputDto {
    pub title: String,
    #[serde(rename = "title_en", default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub css_class: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub contents: Vec<CardContentInputDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardContentInputDto {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "content_en", default)]
    pub content_en: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub css_class: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    #[schema(no_recursion)]
    pub children: Vec<CardContentInputDto>,
}
