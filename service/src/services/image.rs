use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::{ServiceError, repository::RecipeRepository};

#[derive(Debug)]
pub struct ImageService {
    db: DatabaseConnection,
}

impl ImageService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the recipe's image with `bytes`.
    pub async fn save_image_file(&self, recipe_id: i32, bytes: Vec<u8>) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        let mut recipe = RecipeRepository::find_by_id(&txn, recipe_id)
            .await?
            .ok_or(ServiceError::RecipeNotFound(recipe_id))?;

        debug!(recipe_id, size = bytes.len(), "storing recipe image");
        recipe.image = Some(bytes);
        RecipeRepository::save(&txn, recipe).await?;

        txn.commit().await?;
        Ok(())
    }
}
