//! Home card and content block factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    title_en: Option<String>,
    css_class: Option<String>,
    sort_order: i32,
}

impl<'a> CardFactory<'a> {
    /// Defaults to title `"Carte {id}"` at order 0.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Carte {}", id),
            title_en: None,
            css_class: None,
            sort_order: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title_en(mut self, title_en: impl Into<String>) -> Self {
        self.title_en = Some(title_en.into());
        self
    }

    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            title: ActiveValue::Set(self.title),
            title_en: ActiveValue::Set(self.title_en),
            css_class: ActiveValue::Set(self.css_class),
            sort_order: ActiveValue::Set(self.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_card(db: &DatabaseConnection) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db).build().await
}

/// Builder for card content blocks. Defaults to a top-level `text` block.
pub struct CardContentFactory<'a> {
    db: &'a DatabaseConnection,
    card_id: i32,
    parent_id: Option<i32>,
    content_type: String,
    content: Option<String>,
    content_en: Option<String>,
    url: Option<String>,
    css_class: Option<String>,
    sort_order: i32,
}

impl<'a> CardContentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, card_id: i32) -> Self {
        Self {
            db,
            card_id,
            parent_id: None,
            content_type: "text".to_string(),
            content: Some(format!("Contenu {}", next_id())),
            content_en: None,
            url: None,
            css_class: None,
            sort_order: 0,
        }
    }

    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn content_en(mut self, content_en: impl Into<String>) -> Self {
        self.content_en = Some(content_en.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::card_content::Model, DbErr> {
        entity::card_content::ActiveModel {
            card_id: ActiveValue::Set(self.card_id),
            parent_id: ActiveValue::Set(self.parent_id),
            content_type: ActiveValue::Set(self.content_type),
            content: ActiveValue::Set(self.content),
            content_en: ActiveValue::Set(self.content_en),
            url: ActiveValue::Set(self.url),
            css_class: ActiveValue::Set(self.css_class),
            sort_order: ActiveValue::Set(self.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_card_content(
    db: &DatabaseConnection,
    card_id: i32,
) -> Result<entity::card_content::Model, DbErr> {
    CardContentFactory::new(db, card_id).build().await
}
