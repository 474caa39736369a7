//! Transfer objects exchanged with the presentation layer.
//!
//! Commands carry scalars and ids only; the default value of each command is the
//! "empty" result returned when an operation soft-fails.

use entity::sea_orm_active_enums::Difficulty;
use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RecipeCommand {
    pub id: Option<i32>,
    #[validate(
        required(message = "Description is required"),
        length(min = 3, max = 255, message = "Description must be between 3 and 255 characters")
    )]
    pub description: Option<String>,
    #[validate(range(min = 1, max = 999, message = "Prep time must be between 1 and 999"))]
    pub prep_time: Option<i32>,
    #[validate(range(min = 1, max = 999, message = "Cook time must be between 1 and 999"))]
    pub cook_time: Option<i32>,
    #[validate(range(min = 1, max = 100, message = "Servings must be between 1 and 100"))]
    pub servings: Option<i32>,
    pub source: Option<String>,
    #[validate(url(message = "Please provide a valid URL"))]
    pub url: Option<String>,
    #[validate(
        required(message = "Directions are required"),
        custom(function = "not_blank", message = "Directions must not be blank")
    )]
    pub directions: Option<String>,
    pub ingredients: Vec<IngredientCommand>,
    pub difficulty: Option<Difficulty>,
    pub notes: Option<NotesCommand>,
    pub categories: Vec<CategoryCommand>,
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCommand {
    pub id: Option<i32>,
    pub recipe_id: Option<i32>,
    pub description: Option<String>,
    pub amount: Decimal,
    pub uom: Option<UnitOfMeasureCommand>,
}

impl IngredientCommand {
    pub fn uom_id(&self) -> Option<i32> {
        self.uom.as_ref().and_then(|uom| uom.id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesCommand {
    pub id: Option<i32>,
    pub recipe_notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCommand {
    pub id: Option<i32>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasureCommand {
    pub id: Option<i32>,
    pub description: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
