mod common;

use common::{guacamole, setup, uom};
use pretty_assertions::assert_eq;
use recipe_service::{
    RecipeService, ServiceError,
    commands::{CategoryCommand, IngredientCommand, NotesCommand},
    repository::RecipeRepository,
    sea_orm::{EntityTrait, PaginatorTrait, prelude::Decimal},
};

#[tokio::test]
async fn save_then_find_returns_the_same_recipe() {
    let db = setup().await;
    let service = RecipeService::new(db.clone());

    let mut command = guacamole();
    command.notes = Some(NotesCommand {
        id: None,
        recipe_notes: Some("Feel free to experiment!".to_owned()),
    });
    command.categories = vec![CategoryCommand {
        id: Some(3),
        description: Some("Mexican".to_owned()),
    }];

    let saved = service.save_recipe_command(&command).await.unwrap();
    let id = saved.id.unwrap();
    assert_eq!(saved.description, command.description);
    assert_eq!(saved.ingredients.len(), 2);
    assert!(saved.ingredients.iter().all(|i| i.id.is_some()));
    assert!(saved.ingredients.iter().all(|i| i.recipe_id == Some(id)));

    let found = service.find_command_by_id(id).await.unwrap();
    assert_eq!(found, saved);
    assert_eq!(found.prep_time, Some(10));
    assert_eq!(found.url, command.url);
    assert_eq!(
        found
            .ingredients
            .iter()
            .map(|i| (i.description.clone(), i.amount, i.uom_id()))
            .collect::<Vec<_>>(),
        vec![
            (Some("ripe avocados".to_owned()), Decimal::from(2), Some(6)),
            (Some("Kosher salt".to_owned()), Decimal::new(5, 1), Some(1)),
        ]
    );
    assert_eq!(
        found.notes.and_then(|notes| notes.recipe_notes),
        Some("Feel free to experiment!".to_owned())
    );
    assert_eq!(found.categories, command.categories);
}

#[tokio::test]
async fn find_by_unused_id_is_not_found() {
    let db = setup().await;
    let service = RecipeService::new(db);

    let err = service.find_by_id(42).await.unwrap_err();
    assert!(matches!(err, ServiceError::RecipeNotFound(42)));
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Recipe Not Found. For ID value: 42");
}

#[tokio::test]
async fn saving_existing_recipe_merges_children() {
    let db = setup().await;
    let service = RecipeService::new(db.clone());

    let mut command = guacamole();
    command.notes = Some(NotesCommand {
        id: None,
        recipe_notes: Some("Chill before serving.".to_owned()),
    });
    let mut saved = service.save_recipe_command(&command).await.unwrap();
    let id = saved.id.unwrap();
    let kept = saved.ingredients[0].id;

    saved.description = Some("Chunky Guacamole".to_owned());
    saved.ingredients.remove(1);
    saved.ingredients.push(IngredientCommand {
        recipe_id: Some(id),
        description: Some("Cilantro".to_owned()),
        amount: Decimal::from(2),
        uom: uom(2),
        ..Default::default()
    });
    saved.notes = None;

    let updated = service.save_recipe_command(&saved).await.unwrap();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.description.as_deref(), Some("Chunky Guacamole"));
    assert_eq!(updated.ingredients.len(), 2);
    assert_eq!(updated.ingredients[0].id, kept);
    assert_eq!(updated.ingredients[1].description.as_deref(), Some("Cilantro"));
    assert_eq!(updated.notes, None);

    assert_eq!(entity::ingredient::Entity::find().count(&db).await.unwrap(), 2);
    assert_eq!(entity::notes::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(service.get_recipes().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_id_is_inserted_under_a_new_id() {
    let db = setup().await;
    let service = RecipeService::new(db);

    let mut command = guacamole();
    command.id = Some(77);

    let saved = service.save_recipe_command(&command).await.unwrap();
    assert_eq!(saved.id, Some(1));
    assert!(service.find_by_id(77).await.is_err());
}

#[tokio::test]
async fn delete_removes_owned_rows_and_is_idempotent() {
    let db = setup().await;
    let service = RecipeService::new(db.clone());

    let mut command = guacamole();
    command.notes = Some(NotesCommand {
        id: None,
        recipe_notes: Some("Best eaten fresh.".to_owned()),
    });
    command.categories = vec![CategoryCommand {
        id: Some(1),
        description: None,
    }];
    let id = service.save_recipe_command(&command).await.unwrap().id.unwrap();

    service.delete_by_id(id).await.unwrap();
    service.delete_by_id(id).await.unwrap();

    assert!(matches!(
        service.find_by_id(id).await,
        Err(ServiceError::RecipeNotFound(_))
    ));
    assert_eq!(entity::ingredient::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::notes::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::recipe_category::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::category::Entity::find().count(&db).await.unwrap(), 4);
    assert_eq!(RecipeRepository::delete_by_id(&db, id).await.unwrap(), 0);
}

#[tokio::test]
async fn four_decimal_place_amounts_survive_a_save() {
    let db = setup().await;
    let service = RecipeService::new(db);

    let amounts = [
        Decimal::new(1, 4),
        Decimal::new(2675, 3),
        Decimal::new(123456789, 4),
    ];
    let mut command = guacamole();
    command.ingredients = amounts
        .iter()
        .map(|amount| IngredientCommand {
            description: Some("lime juice".to_owned()),
            amount: *amount,
            uom: uom(2),
            ..Default::default()
        })
        .collect();

    let saved = service.save_recipe_command(&command).await.unwrap();
    let found = service.find_command_by_id(saved.id.unwrap()).await.unwrap();
    assert_eq!(
        found.ingredients.iter().map(|i| i.amount).collect::<Vec<_>>(),
        amounts.to_vec()
    );
}
