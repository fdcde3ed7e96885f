//! Home card repository.
//!
//! A card's content tree is stored as flat `card_contents` rows linked by
//! `parent_id`. Writes replace the whole tree, so callers should pass a
//! transaction when they need the card and its rows to change together.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::home::{Card, CardContentParams, CardParams};

pub struct HomeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HomeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all cards ordered by `(sort_order, id)` with their content trees.
    pub async fn get_all(&self) -> Result<Vec<Card>, DbErr> {
        let cards = entity::prelude::Card::find()
            .order_by_asc(entity::card::Column::SortOrder)
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await?;

        if cards.is_empty() {
            return Ok(Vec::new());
        }

        let card_ids: Vec<i32> = cards.iter().map(|card| card.id).collect();
        let mut rows_by_card: HashMap<i32, Vec<entity::card_content::Model>> = HashMap::new();
        for row in entity::prelude::CardContent::find()
            .filter(entity::card_content::Column::CardId.is_in(card_ids))
            .all(self.db)
            .await?
        {
            rows_by_card.entry(row.card_id).or_default().push(row);
        }

        Ok(cards
            .into_iter()
            .map(|card| {
                let rows = rows_by_card.remove(&card.id).unwrap_or_default();
                Card::from_entity(card, rows)
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Card>, DbErr> {
        let Some(card) = entity::prelude::Card::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let rows = entity::prelude::CardContent::find()
            .filter(entity::card_content::Column::CardId.eq(id))
            .all(self.db)
            .await?;

        Ok(Some(Card::from_entity(card, rows)))
    }

    /// Inserts a card and its content tree. Returns the new card id.
    pub async fn create(&self, params: CardParams) -> Result<i32, DbErr> {
        let card = entity::card::ActiveModel {
            title: ActiveValue::Set(params.title),
            title_en: ActiveValue::Set(params.title_en),
            css_class: ActiveValue::Set(params.css_class),
            sort_order: ActiveValue::Set(params.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_contents(card.id, params.contents).await?;

        Ok(card.id)
    }

    /// Replaces the fields and the whole content tree of a card.
    ///
    /// # Returns
    /// - `Ok(true)` - Card updated
    /// - `Ok(false)` - No card with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: CardParams) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::Card::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active: entity::card::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.title_en = ActiveValue::Set(params.title_en);
        active.css_class = ActiveValue::Set(params.css_class);
        active.sort_order = ActiveValue::Set(params.sort_order);
        active.update(self.db).await?;

        self.delete_contents(id).await?;
        self.insert_contents(id, params.contents).await?;

        Ok(true)
    }

    /// Deletes a card with every content row it owns.
    ///
    /// # Returns
    /// - `Ok(true)` - Card deleted
    /// - `Ok(false)` - No card with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.delete_contents(id).await?;

        let result = entity::prelude::Card::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_contents(&self, card_id: i32) -> Result<(), DbErr> {
        entity::prelude::CardContent::delete_many()
            .filter(entity::card_content::Column::CardId.eq(card_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Inserts the tree depth-first so every parent row exists before its
    /// children reference it.
    async fn insert_contents(
        &self,
        card_id: i32,
        contents: Vec<CardContentParams>,
    ) -> Result<(), DbErr> {
        let mut stack: Vec<(Option<i32>, CardContentParams)> =
            contents.into_iter().rev().map(|c| (None, c)).collect();

        while let Some((parent_id, content)) = stack.pop() {
            let row = entity::card_content::ActiveModel {
                card_id: ActiveValue::Set(card_id),
                parent_id: ActiveValue::Set(parent_id),
                content_type: ActiveValue::Set(content.content_type),
                content: ActiveValue::Set(content.content),
                content_en: ActiveValue::Set(content.content_en),
                url: ActiveValue::Set(content.url),
                css_class: ActiveValue::Set(content.css_class),
                sort_order: ActiveValue::Set(content.sort_order),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            stack.extend(
                content
                    .children
                    .into_iter()
                    .rev()
                    .map(|child| (Some(row.id), child)),
            );
        }

        Ok(())
    }
}
