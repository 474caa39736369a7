use entity::{
    category,
    prelude::{Category, UnitOfMeasure},
    unit_of_measure,
};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

const UNITS_OF_MEASURE: [&str; 8] = [
    "Teaspoon",
    "Tablespoon",
    "Cup",
    "Pinch",
    "Ounce",
    "Each",
    "Dash",
    "Pint",
];

const CATEGORIES: [&str; 4] = ["American", "Italian", "Mexican", "Fast Food"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for description in UNITS_OF_MEASURE {
            unit_of_measure::ActiveModel {
                description: Set(description.to_owned()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        for description in CATEGORIES {
            category::ActiveModel {
                description: Set(description.to_owned()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        Category::delete_many()
            .filter(category::Column::Description.is_in(CATEGORIES))
            .exec(db)
            .await?;
        UnitOfMeasure::delete_many()
            .filter(unit_of_measure::Column::Description.is_in(UNITS_OF_MEASURE))
            .exec(db)
            .await?;

        Ok(())
    }
}
