//! Store access. Every function takes any [`ConnectionTrait`](sea_orm::ConnectionTrait),
//! so callers decide whether it runs on the pool or inside their transaction.

mod category;
mod recipe;
mod unit_of_measure;

pub use category::CategoryRepository;
pub use recipe::RecipeRepository;
pub use unit_of_measure::UnitOfMeasureRepository;
