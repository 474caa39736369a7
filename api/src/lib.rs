mod config;
mod error;
mod flash;
mod forms;
mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use migration::{Migrator, MigratorTrait};
use recipe_service::{
    ImageService, IngredientService, RecipeBootstrap, RecipeService, UnitOfMeasureService,
    sea_orm::{Database, DatabaseConnection},
};
use tera::Tera;
use tower_cookies::CookieManagerLayer;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::Config;
pub use error::AppError;

#[derive(Clone)]
pub struct AppState {
    templates: Tera,
    recipes: Arc<RecipeService>,
    ingredients: Arc<IngredientService>,
    units: Arc<UnitOfMeasureService>,
    images: Arc<ImageService>,
}

impl AppState {
    pub fn new(conn: DatabaseConnection) -> Result<Self, tera::Error> {
        let mut templates = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))?;
        templates.autoescape_on(vec![".html.tera"]);

        Ok(Self {
            templates,
            recipes: Arc::new(RecipeService::new(conn.clone())),
            ingredients: Arc::new(IngredientService::new(conn.clone())),
            units: Arc::new(UnitOfMeasureService::new(conn.clone())),
            images: Arc::new(ImageService::new(conn)),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/index", get(handlers::index::index))
        .route("/recipe", post(handlers::recipe::save_or_update))
        .route("/recipe/new", get(handlers::recipe::new_recipe))
        .route("/recipe/{recipe_id}/show", get(handlers::recipe::show))
        .route("/recipe/{recipe_id}/update", get(handlers::recipe::update))
        .route("/recipe/{recipe_id}/delete", get(handlers::recipe::delete))
        .route(
            "/recipe/{recipe_id}/image",
            get(handlers::image::upload_form).post(handlers::image::upload),
        )
        .route("/recipe/{recipe_id}/recipeimage", get(handlers::image::recipe_image))
        .route(
            "/recipe/{recipe_id}/ingredients",
            get(handlers::ingredient::list),
        )
        .route(
            "/recipe/{recipe_id}/ingredient",
            post(handlers::ingredient::save_or_update),
        )
        .route(
            "/recipe/{recipe_id}/ingredient/new",
            get(handlers::ingredient::new_ingredient),
        )
        .route(
            "/recipe/{recipe_id}/ingredient/{id}/show",
            get(handlers::ingredient::show),
        )
        .route(
            "/recipe/{recipe_id}/ingredient/{id}/update",
            get(handlers::ingredient::update),
        )
        .route(
            "/recipe/{recipe_id}/ingredient/{id}/delete",
            get(handlers::ingredient::delete),
        )
        .nest_service(
            "/static",
            ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        )
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = Config::from_env()?;

    let conn = Database::connect(config.database_url.clone()).await?;
    Migrator::up(&conn, None).await?;

    if config.load_bootstrap_data {
        RecipeBootstrap::new(conn.clone()).load().await?;
    }

    let state = AppState::new(conn)?;

    let listener = tokio::net::TcpListener::bind(config.server_url()).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;

    Ok(())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        println!("Error: {err}");
    }
}
