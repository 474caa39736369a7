//! Store layer, converters and application services of the recipe manager.
//!
//! Services receive a [`DatabaseConnection`](sea_orm::DatabaseConnection) when they
//! are constructed and run every mutating operation inside a single transaction.
//! Repositories are generic over [`ConnectionTrait`](sea_orm::ConnectionTrait) so the
//! same queries run against the pool or an open transaction.

pub mod bootstrap;
pub mod commands;
pub mod converters;
pub mod domain;
mod error;
pub mod repository;
pub mod services;

pub use sea_orm;

pub use bootstrap::RecipeBootstrap;
pub use error::ServiceError;
pub use services::{ImageService, IngredientService, RecipeService, UnitOfMeasureService};
