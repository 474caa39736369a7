//! Application services. Each holds its own clone of the connection pool.

mod image;
mod ingredient;
mod recipe;
mod unit_of_measure;

pub use image::ImageService;
pub use ingredient::IngredientService;
pub use recipe::RecipeService;
pub use unit_of_measure::UnitOfMeasureService;
