#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use recipe_service::{
    commands::{IngredientCommand, RecipeCommand, UnitOfMeasureCommand},
    sea_orm::{Database, DatabaseConnection, prelude::Decimal},
};

/// A fresh in-memory database with the schema and lookup rows in place.
pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Seeded unit ids: Teaspoon 1, Tablespoon 2, Cup 3, Pinch 4, Ounce 5, Each 6, Dash 7, Pint 8.
pub fn uom(id: i32) -> Option<UnitOfMeasureCommand> {
    Some(UnitOfMeasureCommand {
        id: Some(id),
        description: None,
    })
}

pub fn guacamole() -> RecipeCommand {
    RecipeCommand {
        description: Some("Perfect Guacamole".to_owned()),
        prep_time: Some(10),
        cook_time: Some(1),
        servings: Some(4),
        source: Some("Simply Recipes".to_owned()),
        url: Some("http://www.simplyrecipes.com/recipes/perfect_guacamole/".to_owned()),
        directions: Some("Cut the avocados in half. Mash with a fork.".to_owned()),
        ingredients: vec![
            IngredientCommand {
                description: Some("ripe avocados".to_owned()),
                amount: Decimal::from(2),
                uom: uom(6),
                ..Default::default()
            },
            IngredientCommand {
                description: Some("Kosher salt".to_owned()),
                amount: Decimal::new(5, 1),
                uom: uom(1),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
