use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use tera::Context;
use tower_cookies::Cookies;
use tracing::{debug, error};

use super::render;
use crate::{
    AppState,
    error::AppError,
    flash::{FlashData, redirect_with_flash},
    forms::parse_id,
};

const IMAGE_FIELD: &str = "imagefile";

pub async fn upload_form(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let recipe = state
        .recipes
        .find_command_by_id(parse_id(&recipe_id)?)
        .await?;

    let mut ctx = Context::new();
    ctx.insert("recipe", &recipe);

    render(&state.templates, "recipe/imageuploadform.html.tera", &ctx)
}

pub async fn upload(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    cookies: Cookies,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let recipe_id = parse_id(&recipe_id)?;

    let mut image = None;
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        error!(error = ?err, "could not read multipart");
        AppError::BadRequest("could not read multipart".to_owned())
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let bytes = field.bytes().await.map_err(|err| {
            error!(error = ?err, "could not read bytes");
            AppError::BadRequest("could not read bytes".to_owned())
        })?;
        image = Some(bytes.to_vec());
    }

    let image = image
        .ok_or_else(|| AppError::BadRequest(format!("missing form field \"{IMAGE_FIELD}\"")))?;
    debug!(recipe_id, size = image.len(), "received image");

    state.images.save_image_file(recipe_id, image).await?;

    Ok(redirect_with_flash(
        &cookies,
        FlashData::success("Image successfully uploaded"),
        &format!("/recipe/{recipe_id}/show"),
    ))
}

pub async fn recipe_image(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Response, AppError> {
    let recipe_id = parse_id(&recipe_id)?;
    let recipe = state.recipes.find_by_id(recipe_id).await?;

    let image = recipe
        .image
        .ok_or_else(|| AppError::NotFound(format!("Recipe {recipe_id} has no image")))?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], image).into_response())
}
