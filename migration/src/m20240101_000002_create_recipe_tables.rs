use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_lookup_tables::{Category, UnitOfMeasure};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recipe::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recipe::Description).string())
                    .col(ColumnDef::new(Recipe::PrepTime).integer())
                    .col(ColumnDef::new(Recipe::CookTime).integer())
                    .col(ColumnDef::new(Recipe::Servings).integer())
                    .col(ColumnDef::new(Recipe::Source).string())
                    .col(ColumnDef::new(Recipe::Url).string())
                    .col(ColumnDef::new(Recipe::Directions).text())
                    .col(ColumnDef::new(Recipe::Image).blob())
                    .col(ColumnDef::new(Recipe::Difficulty).string_len(16))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ingredient::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ingredient::Description).string())
                    .col(ColumnDef::new(Ingredient::Amount).decimal_len(16, 4).not_null())
                    .col(ColumnDef::new(Ingredient::UomId).integer().not_null())
                    .col(ColumnDef::new(Ingredient::RecipeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ingredient-uom_id")
                            .from(Ingredient::Table, Ingredient::UomId)
                            .to(UnitOfMeasure::Table, UnitOfMeasure::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ingredient-recipe_id")
                            .from(Ingredient::Table, Ingredient::RecipeId)
                            .to(Recipe::Table, Recipe::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Notes::RecipeId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Notes::RecipeNotes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notes-recipe_id")
                            .from(Notes::Table, Notes::RecipeId)
                            .to(Recipe::Table, Recipe::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RecipeCategory::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RecipeCategory::RecipeId).integer().not_null())
                    .col(ColumnDef::new(RecipeCategory::CategoryId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk-recipe_category")
                            .col(RecipeCategory::RecipeId)
                            .col(RecipeCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe_category-recipe_id")
                            .from(RecipeCategory::Table, RecipeCategory::RecipeId)
                            .to(Recipe::Table, Recipe::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe_category-category_id")
                            .from(RecipeCategory::Table, RecipeCategory::CategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecipeCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recipe {
    Table,
    Id,
    Description,
    PrepTime,
    CookTime,
    Servings,
    Source,
    Url,
    Directions,
    Image,
    Difficulty,
}

#[derive(DeriveIden)]
enum Ingredient {
    Table,
    Id,
    Description,
    Amount,
    UomId,
    RecipeId,
}

#[derive(DeriveIden)]
enum Notes {
    Table,
    Id,
    RecipeId,
    RecipeNotes,
}

#[derive(DeriveIden)]
enum RecipeCategory {
    Table,
    RecipeId,
    CategoryId,
}
