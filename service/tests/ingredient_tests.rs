mod common;

use common::{guacamole, setup, uom};
use pretty_assertions::assert_eq;
use recipe_service::{
    IngredientService, RecipeService, ServiceError,
    commands::{CategoryCommand, IngredientCommand, RecipeCommand},
    sea_orm::{EntityTrait, PaginatorTrait, prelude::Decimal},
};

async fn saved_guacamole(service: &RecipeService) -> RecipeCommand {
    service.save_recipe_command(&guacamole()).await.unwrap()
}

#[tokio::test]
async fn new_ingredient_adds_exactly_one() {
    let db = setup().await;
    let recipes = RecipeService::new(db.clone());
    let ingredients = IngredientService::new(db);
    let recipe_id = saved_guacamole(&recipes).await.id.unwrap();

    let saved = ingredients
        .save_ingredient_command(&IngredientCommand {
            recipe_id: Some(recipe_id),
            description: Some("Cilantro".to_owned()),
            amount: Decimal::from(2),
            uom: uom(2),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(saved.id.is_some());
    assert_eq!(saved.recipe_id, Some(recipe_id));
    assert_eq!(saved.description.as_deref(), Some("Cilantro"));
    assert_eq!(
        saved.uom.and_then(|uom| uom.description).as_deref(),
        Some("Tablespoon")
    );

    let recipe = recipes.find_by_id(recipe_id).await.unwrap();
    assert_eq!(recipe.ingredients.len(), 3);
}

#[tokio::test]
async fn matching_id_updates_in_place() {
    let db = setup().await;
    let recipes = RecipeService::new(db.clone());
    let ingredients = IngredientService::new(db);
    let recipe = saved_guacamole(&recipes).await;
    let recipe_id = recipe.id.unwrap();

    let mut salt = recipe.ingredients[1].clone();
    salt.description = Some("Sea salt".to_owned());
    salt.amount = Decimal::from(1);
    salt.uom = uom(4);

    let saved = ingredients.save_ingredient_command(&salt).await.unwrap();
    assert_eq!(saved.id, salt.id);
    assert_eq!(saved.description.as_deref(), Some("Sea salt"));
    assert_eq!(saved.amount, Decimal::from(1));
    assert_eq!(saved.uom_id(), Some(4));

    let reloaded = recipes.find_by_id(recipe_id).await.unwrap();
    assert_eq!(reloaded.ingredients.len(), 2);
    let stored = reloaded.ingredient(salt.id.unwrap()).unwrap();
    assert_eq!(stored.description.as_deref(), Some("Sea salt"));
    assert_eq!(
        stored.uom.as_ref().and_then(|uom| uom.description.as_deref()),
        Some("Pinch")
    );
}

#[tokio::test]
async fn unknown_recipe_returns_empty_command_without_writing() {
    let db = setup().await;
    let recipes = RecipeService::new(db.clone());
    let ingredients = IngredientService::new(db.clone());
    saved_guacamole(&recipes).await;

    let result = ingredients
        .save_ingredient_command(&IngredientCommand {
            recipe_id: Some(99),
            description: Some("Cilantro".to_owned()),
            amount: Decimal::from(2),
            uom: uom(2),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(result, IngredientCommand::default());
    assert_eq!(entity::ingredient::Entity::find().count(&db).await.unwrap(), 2);
}

#[tokio::test]
async fn unknown_unit_of_measure_is_an_error() {
    let db = setup().await;
    let recipes = RecipeService::new(db.clone());
    let ingredients = IngredientService::new(db);
    let recipe = saved_guacamole(&recipes).await;

    let mut avocados = recipe.ingredients[0].clone();
    avocados.uom = uom(404);

    let err = ingredients
        .save_ingredient_command(&avocados)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::UnitOfMeasureNotFound(Some(404))));

    let reloaded = recipes.find_by_id(recipe.id.unwrap()).await.unwrap();
    assert_eq!(reloaded.ingredients[0].uom_id(), Some(6));
}

#[tokio::test]
async fn delete_removes_exactly_one_or_nothing() {
    let db = setup().await;
    let recipes = RecipeService::new(db.clone());
    let ingredients = IngredientService::new(db.clone());
    let recipe = saved_guacamole(&recipes).await;
    let recipe_id = recipe.id.unwrap();
    let salt_id = recipe.ingredients[1].id.unwrap();

    ingredients.delete_by_id(99, salt_id).await.unwrap();
    ingredients.delete_by_id(recipe_id, 99).await.unwrap();
    assert_eq!(entity::ingredient::Entity::find().count(&db).await.unwrap(), 2);

    ingredients.delete_by_id(recipe_id, salt_id).await.unwrap();

    let reloaded = recipes.find_by_id(recipe_id).await.unwrap();
    assert_eq!(reloaded.ingredients.len(), 1);
    assert_eq!(reloaded.ingredient(salt_id), None);
    assert_eq!(entity::ingredient::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn missing_ingredient_is_distinct_from_missing_recipe() {
    let db = setup().await;
    let recipes = RecipeService::new(db.clone());
    let ingredients = IngredientService::new(db);
    let first = saved_guacamole(&recipes).await;
    let second = saved_guacamole(&recipes).await;
    let foreign = second.ingredients[0].id.unwrap();

    let err = ingredients
        .find_by_recipe_id_and_ingredient_id(first.id.unwrap(), foreign)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::IngredientNotFound { ingredient_id, .. } if ingredient_id == foreign
    ));

    let err = ingredients
        .find_by_recipe_id_and_ingredient_id(99, foreign)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::RecipeNotFound(99)));

    let found = ingredients
        .find_by_recipe_id_and_ingredient_id(second.id.unwrap(), foreign)
        .await
        .unwrap();
    assert_eq!(found, second.ingredients[0]);
}

#[tokio::test]
async fn each_cup_american_scenario() {
    let db = setup().await;
    let recipes = RecipeService::new(db);

    let saved = recipes
        .save_recipe_command(&RecipeCommand {
            description: Some("Avocado toast".to_owned()),
            directions: Some("Toast the bread.".to_owned()),
            ingredients: vec![IngredientCommand {
                description: Some("avocados".to_owned()),
                amount: Decimal::from(2),
                uom: uom(6),
                ..Default::default()
            }],
            categories: vec![CategoryCommand {
                id: Some(1),
                description: None,
            }],
            ..Default::default()
        })
        .await
        .unwrap();

    let recipe = recipes.find_by_id(saved.id.unwrap()).await.unwrap();
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.ingredients[0].amount, Decimal::from(2));
    assert_eq!(
        recipe.ingredients[0]
            .uom
            .as_ref()
            .and_then(|uom| uom.description.as_deref()),
        Some("Each")
    );
    assert_eq!(
        recipe
            .categories
            .iter()
            .map(|category| category.description.as_deref())
            .collect::<Vec<_>>(),
        vec![Some("American")]
    );
}

#[tokio::test]
async fn identical_new_ingredient_resolves_to_the_older_row() {
    let db = setup().await;
    let recipes = RecipeService::new(db.clone());
    let ingredients = IngredientService::new(db);
    let recipe = saved_guacamole(&recipes).await;
    let recipe_id = recipe.id.unwrap();
    let avocados = &recipe.ingredients[0];

    let saved = ingredients
        .save_ingredient_command(&IngredientCommand {
            recipe_id: Some(recipe_id),
            description: Some("ripe avocados".to_owned()),
            amount: Decimal::from(2),
            uom: uom(6),
            ..Default::default()
        })
        .await
        .unwrap();

    let stored = recipes.find_by_id(recipe_id).await.unwrap();
    assert_eq!(stored.ingredients.len(), recipe.ingredients.len() + 1);
    assert_eq!(saved.id, avocados.id);
    assert_ne!(stored.ingredients.last().unwrap().id, avocados.id);
}
