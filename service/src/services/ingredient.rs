use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, error};

use crate::{
    ServiceError,
    commands::IngredientCommand,
    domain::Ingredient,
    repository::{RecipeRepository, UnitOfMeasureRepository},
};

#[derive(Debug)]
pub struct IngredientService {
    db: DatabaseConnection,
}

impl IngredientService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_recipe_id_and_ingredient_id(
        &self,
        recipe_id: i32,
        ingredient_id: i32,
    ) -> Result<IngredientCommand, ServiceError> {
        let recipe = RecipeRepository::find_by_id(&self.db, recipe_id)
            .await?
            .ok_or(ServiceError::RecipeNotFound(recipe_id))?;

        recipe
            .ingredient(ingredient_id)
            .map(IngredientCommand::from)
            .ok_or(ServiceError::IngredientNotFound {
                recipe_id,
                ingredient_id,
            })
    }

    /// Adds the ingredient to its recipe, or updates it when the recipe already
    /// holds an ingredient with the command's id.
    ///
    /// An unknown recipe is logged and answered with an empty command. The saved
    /// ingredient is located again by id and then by description, amount and unit,
    /// so two identical ingredients may be mistaken for one another.
    pub async fn save_ingredient_command(
        &self,
        command: &IngredientCommand,
    ) -> Result<IngredientCommand, ServiceError> {
        let txn = self.db.begin().await?;

        let recipe = match command.recipe_id {
            Some(recipe_id) => RecipeRepository::find_by_id(&txn, recipe_id).await?,
            None => None,
        };
        let Some(mut recipe) = recipe else {
            error!(recipe_id = ?command.recipe_id, "recipe not found for ingredient");
            return Ok(IngredientCommand::default());
        };

        let uom = match command.uom_id() {
            Some(uom_id) => UnitOfMeasureRepository::find_by_id(&txn, uom_id).await?,
            None => None,
        }
        .ok_or(ServiceError::UnitOfMeasureNotFound(command.uom_id()))?;

        match command.id.and_then(|id| recipe.ingredient_mut(id)) {
            Some(found) => {
                found.description = command.description.clone();
                found.amount = command.amount;
                found.uom = Some(uom);
            }
            None => {
                let mut ingredient = Ingredient::from(command);
                ingredient.uom = Some(uom);
                recipe.add_ingredient(ingredient);
            }
        }

        let recipe_id = recipe.id.unwrap_or_default();
        let saved = RecipeRepository::save(&txn, recipe).await?;

        let located = command
            .id
            .and_then(|id| saved.ingredient(id))
            .or_else(|| {
                saved.ingredients.iter().find(|ingredient| {
                    ingredient.description == command.description
                        && ingredient.amount == command.amount
                        && ingredient.uom_id() == command.uom_id()
                })
            })
            .map(IngredientCommand::from)
            .ok_or(ServiceError::SavedIngredientMissing { recipe_id })?;

        txn.commit().await?;
        debug!(recipe_id, ingredient_id = ?located.id, "saved ingredient");

        Ok(located)
    }

    /// Removes one ingredient from its recipe. Unknown recipes or ingredients are
    /// logged and ignored.
    pub async fn delete_by_id(&self, recipe_id: i32, ingredient_id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        let Some(mut recipe) = RecipeRepository::find_by_id(&txn, recipe_id).await? else {
            error!(recipe_id, "recipe not found, nothing deleted");
            return Ok(());
        };

        if recipe.remove_ingredient(ingredient_id).is_none() {
            error!(recipe_id, ingredient_id, "ingredient not found, nothing deleted");
            return Ok(());
        }

        RecipeRepository::save(&txn, recipe).await?;

        txn.commit().await?;
        debug!(recipe_id, ingredient_id, "deleted ingredient");

        Ok(())
    }
}
