use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the application services.
///
/// Absence is not always an error: saving an ingredient for an unknown recipe and
/// deleting unknown ingredients are logged and answered with a default result.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Recipe Not Found. For ID value: {0}")]
    RecipeNotFound(i32),
    #[error("Ingredient Not Found. For ID value: {ingredient_id} (recipe {recipe_id})")]
    IngredientNotFound { recipe_id: i32, ingredient_id: i32 },
    #[error("Saved ingredient could not be located in recipe {recipe_id}")]
    SavedIngredientMissing { recipe_id: i32 },
    #[error("Unit of measure not found. For ID value: {0:?}")]
    UnitOfMeasureNotFound(Option<i32>),
    #[error("Expected unit of measure not found: {0}")]
    MissingUnitOfMeasure(String),
    #[error("Expected category not found: {0}")]
    MissingCategory(String),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl ServiceError {
    /// Whether the error means a requested recipe or ingredient does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RecipeNotFound(_) | Self::IngredientNotFound { .. }
        )
    }
}
