use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipe_category::Entity")]
    RecipeCategory,
}

impl Related<super::recipe_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeCategory.def()
    }
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_category::Relation::Recipe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
