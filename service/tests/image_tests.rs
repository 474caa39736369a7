mod common;

use common::{guacamole, setup};
use pretty_assertions::assert_eq;
use recipe_service::{ImageService, RecipeService, ServiceError};

#[tokio::test]
async fn stores_image_bytes_on_the_recipe() {
    let db = setup().await;
    let recipes = RecipeService::new(db.clone());
    let images = ImageService::new(db);
    let saved = recipes.save_recipe_command(&guacamole()).await.unwrap();
    let id = saved.id.unwrap();

    images.save_image_file(id, vec![0x89, b'P', b'N', b'G']).await.unwrap();

    let recipe = recipes.find_by_id(id).await.unwrap();
    assert_eq!(recipe.image, Some(vec![0x89, b'P', b'N', b'G']));
    assert_eq!(recipe.ingredients.len(), saved.ingredients.len());
}

#[tokio::test]
async fn unknown_recipe_is_an_error() {
    let db = setup().await;
    let images = ImageService::new(db);

    let err = images.save_image_file(5, vec![1, 2, 3]).await.unwrap_err();
    assert!(matches!(err, ServiceError::RecipeNotFound(5)));
}
