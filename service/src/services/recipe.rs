use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::{ServiceError, commands::RecipeCommand, domain::Recipe, repository::RecipeRepository};

#[derive(Debug)]
pub struct RecipeService {
    db: DatabaseConnection,
}

impl RecipeService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_recipes(&self) -> Result<Vec<Recipe>, ServiceError> {
        debug!("listing recipes");
        Ok(RecipeRepository::find_all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Recipe, ServiceError> {
        RecipeRepository::find_by_id(&self.db, id)
            .await?
            .ok_or(ServiceError::RecipeNotFound(id))
    }

    pub async fn find_command_by_id(&self, id: i32) -> Result<RecipeCommand, ServiceError> {
        let recipe = self.find_by_id(id).await?;
        Ok(RecipeCommand::from(&recipe))
    }

    pub async fn save_recipe_command(
        &self,
        command: &RecipeCommand,
    ) -> Result<RecipeCommand, ServiceError> {
        let txn = self.db.begin().await?;

        let saved = RecipeRepository::save(&txn, Recipe::from(command)).await?;

        txn.commit().await?;
        debug!(recipe_id = ?saved.id, "saved recipe command");

        Ok(RecipeCommand::from(&saved))
    }

    /// Removes the recipe with its ingredients and notes. Unknown ids are ignored.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        RecipeRepository::delete_by_id(&txn, id).await?;

        txn.commit().await?;
        Ok(())
    }
}
