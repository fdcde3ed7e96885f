//! Home page cards.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::home::HomeRepository,
    error::AppError,
    model::home::{Card, CardContentParams, CardParams},
};

pub struct HomeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HomeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_cards(&self) -> Result<Vec<Card>, AppError> {
        Ok(HomeRepository::new(self.db).get_all().await?)
    }

    pub async fn get_card(&self, id: i32) -> Result<Card, AppError> {
        HomeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| card_not_found(id))
    }

    /// Creates a card with its content tree in one transaction.
    pub async fn create_card(&self, params: CardParams) -> Result<Card, AppError> {
        validate(&params)?;

        let txn = self.db.begin().await?;
        let id = HomeRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!("Created home card {}", id);

        self.get_card(id).await
    }

    /// Replaces a card and its whole content tree in one transaction.
    ///
    /// # Returns
    /// - `Ok(Card)` - Updated card
    /// - `Err(AppError::BadRequest)` - Blank title or content type
    /// - `Err(AppError::NotFound)` - Card does not exist
    pub async fn update_card(&self, id: i32, params: CardParams) -> Result<Card, AppError> {
        validate(&params)?;

        let txn = self.db.begin().await?;
        let updated = HomeRepository::new(&txn).update(id, params).await?;
        if !updated {
            txn.rollback().await?;
            return Err(card_not_found(id));
        }
        txn.commit().await?;

        self.get_card(id).await
    }

    /// Deletes a card and every content row under it in one transaction.
    pub async fn delete_card(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let deleted = HomeRepository::new(&txn).delete(id).await?;
        if !deleted {
            txn.rollback().await?;
            return Err(card_not_found(id));
        }
        txn.commit().await?;

        tracing::info!("Deleted home card {}", id);

        Ok(())
    }
}

fn card_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Card {} not found", id))
}

fn validate(params: &CardParams) -> Result<(), AppError> {
    if params.title.is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    let mut pending: Vec<&CardContentParams> = params.contents.iter().collect();
    while let Some(content) = pending.pop() {
        if content.content_type.is_empty() {
            return Err(AppError::BadRequest("content type is required".to_string()));
        }
        pending.extend(content.children.iter());
    }

    Ok(())
}
