use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::Difficulty;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "recipe")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub source: Option<String>,
    pub url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub directions: Option<String>,
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ingredient::Entity")]
    Ingredient,
    #[sea_orm(has_one = "super::notes::Entity")]
    Notes,
    #[sea_orm(has_many = "super::recipe_category::Entity")]
    RecipeCategory,
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl Related<super::notes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notes.def()
    }
}

impl Related<super::recipe_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeCategory.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_category::Relation::Recipe.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
