use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use recipe_service::{
    ServiceError,
    commands::{IngredientCommand, RecipeCommand, UnitOfMeasureCommand},
};
use tera::Context;
use tower_cookies::Cookies;
use tracing::debug;

use super::{context_with_flash, render};
use crate::{
    AppState,
    error::AppError,
    flash::{FlashData, redirect_with_flash},
    forms::{IngredientForm, parse_id},
};

const INGREDIENT_FORM: &str = "recipe/ingredient/ingredientform.html.tera";

async fn render_form(
    state: &AppState,
    ingredient: &IngredientCommand,
) -> Result<Html<String>, AppError> {
    let units = state.units.list_all_uoms().await?;

    let mut ctx = Context::new();
    ctx.insert("ingredient", ingredient);
    ctx.insert("uom_list", &units);

    render(&state.templates, INGREDIENT_FORM, &ctx)
}

pub async fn list(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let recipe_id = parse_id(&recipe_id)?;
    debug!(recipe_id, "Getting ingredient list for recipe");

    let recipe = state.recipes.find_command_by_id(recipe_id).await?;

    let mut ctx = context_with_flash(&cookies);
    ctx.insert("recipe", &recipe);

    render(&state.templates, "recipe/ingredient/list.html.tera", &ctx)
}

pub async fn show(
    State(state): State<AppState>,
    Path((recipe_id, id)): Path<(String, String)>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let ingredient = state
        .ingredients
        .find_by_recipe_id_and_ingredient_id(parse_id(&recipe_id)?, parse_id(&id)?)
        .await?;

    let mut ctx = context_with_flash(&cookies);
    ctx.insert("ingredient", &ingredient);

    render(&state.templates, "recipe/ingredient/show.html.tera", &ctx)
}

pub async fn new_ingredient(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Html<String>, AppError> {
    // the recipe has to exist before an ingredient can be added to it
    let recipe: RecipeCommand = state
        .recipes
        .find_command_by_id(parse_id(&recipe_id)?)
        .await?;

    let ingredient = IngredientCommand {
        recipe_id: recipe.id,
        uom: Some(UnitOfMeasureCommand::default()),
        ..Default::default()
    };

    render_form(&state, &ingredient).await
}

pub async fn update(
    State(state): State<AppState>,
    Path((recipe_id, id)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let ingredient = state
        .ingredients
        .find_by_recipe_id_and_ingredient_id(parse_id(&recipe_id)?, parse_id(&id)?)
        .await?;

    render_form(&state, &ingredient).await
}

pub async fn save_or_update(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    cookies: Cookies,
    Form(form): Form<IngredientForm>,
) -> Result<Redirect, AppError> {
    let recipe_id = parse_id(&recipe_id)?;
    let command = form.into_command(recipe_id)?;

    let saved = state.ingredients.save_ingredient_command(&command).await?;
    let Some(id) = saved.id else {
        return Err(ServiceError::RecipeNotFound(recipe_id).into());
    };
    debug!(recipe_id, ingredient_id = id, "saved ingredient");

    Ok(redirect_with_flash(
        &cookies,
        FlashData::success("Ingredient successfully saved"),
        &format!("/recipe/{recipe_id}/ingredient/{id}/show"),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((recipe_id, id)): Path<(String, String)>,
    cookies: Cookies,
) -> Result<Redirect, AppError> {
    let recipe_id = parse_id(&recipe_id)?;
    let id = parse_id(&id)?;
    debug!(recipe_id, ingredient_id = id, "deleting ingredient");

    state.ingredients.delete_by_id(recipe_id, id).await?;

    Ok(redirect_with_flash(
        &cookies,
        FlashData::success("Ingredient successfully deleted"),
        &format!("/recipe/{recipe_id}/ingredients"),
    ))
}
