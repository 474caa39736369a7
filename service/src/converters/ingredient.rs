use crate::{
    commands::{IngredientCommand, UnitOfMeasureCommand},
    domain::{Ingredient, UnitOfMeasure},
};

impl From<&Ingredient> for IngredientCommand {
    fn from(source: &Ingredient) -> Self {
        Self {
            id: source.id,
            recipe_id: source.recipe_id,
            description: source.description.clone(),
            amount: source.amount,
            uom: source.uom.as_ref().map(UnitOfMeasureCommand::from),
        }
    }
}

/// A set recipe id becomes the ingredient's back-reference, so the store can
/// resolve the owning row without loading the recipe first.
impl From<&IngredientCommand> for Ingredient {
    fn from(source: &IngredientCommand) -> Self {
        Self {
            id: source.id,
            description: source.description.clone(),
            amount: source.amount,
            uom: source.uom.as_ref().map(UnitOfMeasure::from),
            recipe_id: source.recipe_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sea_orm::prelude::Decimal;

    #[test]
    fn command_to_ingredient_links_recipe_and_unit() {
        let command = IngredientCommand {
            id: Some(7),
            recipe_id: Some(2),
            description: Some("Kosher salt".to_owned()),
            amount: Decimal::new(5, 1),
            uom: Some(UnitOfMeasureCommand {
                id: Some(1),
                description: Some("Teaspoon".to_owned()),
            }),
        };

        let ingredient = Ingredient::from(&command);
        assert_eq!(ingredient.id, Some(7));
        assert_eq!(ingredient.recipe_id, Some(2));
        assert_eq!(ingredient.amount, Decimal::new(5, 1));
        assert_eq!(ingredient.uom_id(), Some(1));

        assert_eq!(IngredientCommand::from(&ingredient), command);
    }

    #[test]
    fn missing_unit_stays_missing() {
        let command = IngredientCommand {
            description: Some("Water".to_owned()),
            ..Default::default()
        };

        let ingredient = Ingredient::from(&command);
        assert_eq!(ingredient.uom, None);
        assert_eq!(ingredient.recipe_id, None);
    }
}
