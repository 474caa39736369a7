//! Form bodies posted by the HTML pages. Every field arrives as text.

use std::{collections::BTreeMap, str::FromStr};

use entity::sea_orm_active_enums::Difficulty;
use recipe_service::{
    commands::{IngredientCommand, NotesCommand, RecipeCommand, UnitOfMeasureCommand},
    sea_orm::prelude::Decimal,
};
use serde::Deserialize;
use validator::ValidationErrors;

use crate::error::AppError;

/// Messages per form field, shown next to the inputs.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("For input string: \"{raw}\"")))
}

fn optional_id(raw: &str) -> Result<Option<i32>, AppError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_id(raw).map(Some)
}

fn optional_text(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn optional_value<T: FromStr>(raw: &str) -> Result<Option<T>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some).map_err(|_| ())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecipeForm {
    pub id: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub source: String,
    pub url: String,
    pub directions: String,
    pub difficulty: String,
    pub recipe_notes: String,
}

impl RecipeForm {
    pub fn id(&self) -> Result<Option<i32>, AppError> {
        optional_id(&self.id)
    }

    /// Copies the submitted fields onto `command`, leaving its ingredients,
    /// categories and image alone. Values that do not parse are reported per field.
    pub fn apply_to(self, command: &mut RecipeCommand) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let mut number = |field: &str, raw: &str, label: &str| -> Option<i32> {
            optional_value(raw).unwrap_or_else(|()| {
                errors
                    .entry(field.to_owned())
                    .or_default()
                    .push(format!("{label} must be a number"));
                None
            })
        };

        command.prep_time = number("prep_time", &self.prep_time, "Prep time");
        command.cook_time = number("cook_time", &self.cook_time, "Cook time");
        command.servings = number("servings", &self.servings, "Servings");

        command.difficulty = match optional_value::<Difficulty>(&self.difficulty) {
            Ok(difficulty) => difficulty,
            Err(()) => {
                errors
                    .entry("difficulty".to_owned())
                    .or_default()
                    .push("Unknown difficulty".to_owned());
                None
            }
        };

        command.description = optional_text(self.description);
        command.source = optional_text(self.source);
        command.url = optional_text(self.url);
        command.directions = optional_text(self.directions);

        let recipe_notes = optional_text(self.recipe_notes);
        match command.notes.as_mut() {
            Some(notes) => notes.recipe_notes = recipe_notes,
            None if recipe_notes.is_some() => {
                command.notes = Some(NotesCommand {
                    id: None,
                    recipe_notes,
                });
            }
            None => {}
        }

        errors
    }
}

/// Flattens validator output into the per-field message map.
pub fn collect_errors(errors: &ValidationErrors, into: &mut FieldErrors) {
    for (field, failures) in errors.field_errors() {
        let messages = into.entry(field.to_string()).or_default();
        for failure in failures {
            messages.push(
                failure
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| failure.code.to_string()),
            );
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IngredientForm {
    pub id: String,
    pub description: String,
    pub amount: String,
    pub uom_id: String,
}

impl IngredientForm {
    pub fn into_command(self, recipe_id: i32) -> Result<IngredientCommand, AppError> {
        let amount = Decimal::from_str(self.amount.trim()).map_err(|_| {
            AppError::BadRequest(format!("Amount is not a number: \"{}\"", self.amount))
        })?;

        Ok(IngredientCommand {
            id: optional_id(&self.id)?,
            recipe_id: Some(recipe_id),
            description: optional_text(self.description),
            amount,
            uom: Some(UnitOfMeasureCommand {
                id: optional_id(&self.uom_id)?,
                description: None,
            }),
        })
    }
}
