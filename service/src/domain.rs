//! Detached entity values the services work with.
//!
//! A [`Recipe`] is an aggregate: it owns its ingredients and notes and refers to
//! categories. Children point back at their recipe by id only.

use entity::{category, notes, sea_orm_active_enums::Difficulty, unit_of_measure};
use sea_orm::prelude::Decimal;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recipe {
    pub id: Option<i32>,
    pub description: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub directions: Option<String>,
    pub image: Option<Vec<u8>>,
    pub difficulty: Option<Difficulty>,
    pub ingredients: Vec<Ingredient>,
    pub notes: Option<Notes>,
    pub categories: Vec<Category>,
}

impl Recipe {
    /// Attaches an ingredient, pointing it back at this recipe.
    pub fn add_ingredient(&mut self, mut ingredient: Ingredient) -> &mut Self {
        ingredient.recipe_id = self.id;
        self.ingredients.push(ingredient);
        self
    }

    /// Replaces the notes, pointing them back at this recipe.
    pub fn set_notes(&mut self, mut notes: Notes) -> &mut Self {
        notes.recipe_id = self.id;
        self.notes = Some(notes);
        self
    }

    pub fn ingredient(&self, id: i32) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == Some(id))
    }

    pub fn ingredient_mut(&mut self, id: i32) -> Option<&mut Ingredient> {
        self.ingredients
            .iter_mut()
            .find(|ingredient| ingredient.id == Some(id))
    }

    /// Detaches the ingredient with the given id, clearing its recipe reference.
    pub fn remove_ingredient(&mut self, id: i32) -> Option<Ingredient> {
        let position = self
            .ingredients
            .iter()
            .position(|ingredient| ingredient.id == Some(id))?;
        let mut removed = self.ingredients.remove(position);
        removed.recipe_id = None;
        Some(removed)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ingredient {
    pub id: Option<i32>,
    pub description: Option<String>,
    pub amount: Decimal,
    pub uom: Option<UnitOfMeasure>,
    /// Back-reference to the owning recipe.
    pub recipe_id: Option<i32>,
}

impl Ingredient {
    pub fn new(description: impl Into<String>, amount: Decimal, uom: UnitOfMeasure) -> Self {
        Self {
            description: Some(description.into()),
            amount,
            uom: Some(uom),
            ..Default::default()
        }
    }

    pub fn uom_id(&self) -> Option<i32> {
        self.uom.as_ref().and_then(|uom| uom.id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notes {
    pub id: Option<i32>,
    /// Back-reference to the owning recipe.
    pub recipe_id: Option<i32>,
    pub recipe_notes: Option<String>,
}

impl Notes {
    pub fn new(recipe_notes: impl Into<String>) -> Self {
        Self {
            recipe_notes: Some(recipe_notes.into()),
            ..Default::default()
        }
    }
}

impl From<notes::Model> for Notes {
    fn from(model: notes::Model) -> Self {
        Self {
            id: Some(model.id),
            recipe_id: Some(model.recipe_id),
            recipe_notes: model.recipe_notes,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: Option<i32>,
    pub description: Option<String>,
}

impl From<category::Model> for Category {
    fn from(model: category::Model) -> Self {
        Self {
            id: Some(model.id),
            description: Some(model.description),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnitOfMeasure {
    pub id: Option<i32>,
    pub description: Option<String>,
}

impl From<unit_of_measure::Model> for UnitOfMeasure {
    fn from(model: unit_of_measure::Model) -> Self {
        Self {
            id: Some(model.id),
            description: Some(model.description),
        }
    }
}
