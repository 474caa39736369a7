pub use super::category::Entity as Category;
pub use super::ingredient::Entity as Ingredient;
pub use super::notes::Entity as Notes;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_category::Entity as RecipeCategory;
pub use super::unit_of_measure::Entity as UnitOfMeasure;
