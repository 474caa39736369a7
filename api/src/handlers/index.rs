use axum::{extract::State, response::Html};
use recipe_service::commands::RecipeCommand;
use tower_cookies::Cookies;
use tracing::debug;

use super::{context_with_flash, render};
use crate::{AppState, error::AppError};

pub async fn index(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    debug!("Getting Index page");

    let recipes: Vec<RecipeCommand> = state
        .recipes
        .get_recipes()
        .await?
        .iter()
        .map(RecipeCommand::from)
        .collect();

    let mut ctx = context_with_flash(&cookies);
    ctx.insert("recipes", &recipes);

    render(&state.templates, "index.html.tera", &ctx)
}
