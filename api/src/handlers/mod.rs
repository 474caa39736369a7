pub mod image;
pub mod index;
pub mod ingredient;
pub mod recipe;

use axum::response::Html;
use tera::{Context, Tera};
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    flash::{FlashData, take_flash_cookie},
};

fn render(templates: &Tera, name: &str, ctx: &Context) -> Result<Html<String>, AppError> {
    Ok(Html(templates.render(name, ctx)?))
}

/// A template context carrying the pending flash message, if any.
fn context_with_flash(cookies: &Cookies) -> Context {
    let mut ctx = Context::new();
    if let Some(value) = take_flash_cookie::<FlashData>(cookies) {
        ctx.insert("flash", &value);
    }
    ctx
}
