use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use entity::sea_orm_active_enums::Difficulty;
use recipe_service::{commands::RecipeCommand, sea_orm::Iterable};
use tera::Context;
use tower_cookies::Cookies;
use tracing::debug;
use validator::Validate;

use super::{context_with_flash, render};
use crate::{
    AppState,
    error::AppError,
    flash::{FlashData, redirect_with_flash},
    forms::{FieldErrors, RecipeForm, collect_errors, parse_id},
};

const RECIPE_FORM: &str = "recipe/recipeform.html.tera";

fn render_form(
    state: &AppState,
    recipe: &RecipeCommand,
    errors: &FieldErrors,
) -> Result<Html<String>, AppError> {
    let difficulties: Vec<&str> = Difficulty::iter().map(|difficulty| difficulty.as_str()).collect();

    let mut ctx = Context::new();
    ctx.insert("recipe", recipe);
    ctx.insert("difficulties", &difficulties);
    ctx.insert("errors", errors);

    render(&state.templates, RECIPE_FORM, &ctx)
}

pub async fn show(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let recipe = state.recipes.find_by_id(parse_id(&recipe_id)?).await?;
    let recipe = RecipeCommand::from(&recipe);

    let mut ctx = context_with_flash(&cookies);
    ctx.insert("recipe", &recipe);
    ctx.insert("has_image", &recipe.image.is_some());

    render(&state.templates, "recipe/show.html.tera", &ctx)
}

pub async fn new_recipe(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_form(&state, &RecipeCommand::default(), &FieldErrors::new())
}

pub async fn update(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let recipe = state
        .recipes
        .find_command_by_id(parse_id(&recipe_id)?)
        .await?;

    render_form(&state, &recipe, &FieldErrors::new())
}

/// Saves the posted form. Edits keep the recipe's ingredients, categories and image.
pub async fn save_or_update(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<RecipeForm>,
) -> Result<Response, AppError> {
    let mut command = match form.id()? {
        Some(id) => match state.recipes.find_command_by_id(id).await {
            Ok(command) => command,
            Err(err) if err.is_not_found() => RecipeCommand {
                id: Some(id),
                ..Default::default()
            },
            Err(err) => return Err(err.into()),
        },
        None => RecipeCommand::default(),
    };

    let mut errors = form.apply_to(&mut command);
    if let Err(failures) = command.validate() {
        collect_errors(&failures, &mut errors);
    }

    if !errors.is_empty() {
        debug!(?errors, "recipe form rejected");
        return Ok(render_form(&state, &command, &errors)?.into_response());
    }

    let saved = state.recipes.save_recipe_command(&command).await?;
    let id = saved.id.unwrap_or_default();

    Ok(redirect_with_flash(
        &cookies,
        FlashData::success("Recipe successfully saved"),
        &format!("/recipe/{id}/show"),
    )
    .into_response())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    cookies: Cookies,
) -> Result<Redirect, AppError> {
    let recipe_id = parse_id(&recipe_id)?;
    debug!(recipe_id, "Deleting id");

    state.recipes.delete_by_id(recipe_id).await?;

    Ok(redirect_with_flash(
        &cookies,
        FlashData::success("Recipe successfully deleted"),
        "/",
    ))
}
