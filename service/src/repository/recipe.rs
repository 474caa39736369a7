use std::collections::{HashMap, HashSet};

use ::entity::{category, ingredient, notes, recipe, recipe_category, unit_of_measure};
use sea_orm::*;
use tracing::debug;

use crate::domain::{Category, Ingredient, Notes, Recipe, UnitOfMeasure};

/// Persists recipes together with the ingredients and notes they own and the
/// links to the categories they are filed under.
pub struct RecipeRepository;

impl RecipeRepository {
    pub async fn find_by_id<C>(db: &C, id: i32) -> Result<Option<Recipe>, DbErr>
    where
        C: ConnectionTrait,
    {
        let Some(model) = recipe::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        Ok(Self::assemble(db, vec![model]).await?.pop())
    }

    pub async fn find_all<C>(db: &C) -> Result<Vec<Recipe>, DbErr>
    where
        C: ConnectionTrait,
    {
        let models = recipe::Entity::find()
            .order_by_asc(recipe::Column::Id)
            .all(db)
            .await?;

        Self::assemble(db, models).await
    }

    pub async fn count<C>(db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        recipe::Entity::find().count(db).await
    }

    /// Upserts the whole aggregate and returns it as stored.
    ///
    /// A recipe whose id is absent or unknown is inserted under a generated id.
    /// Owned rows are merged: ingredients missing from `recipe` are deleted, known
    /// ones updated and the rest inserted; notes follow the same rule; category
    /// links are replaced.
    pub async fn save<C>(db: &C, recipe: Recipe) -> Result<Recipe, DbErr>
    where
        C: ConnectionTrait,
    {
        let Recipe {
            id,
            description,
            prep_time,
            cook_time,
            servings,
            source,
            url,
            directions,
            image,
            difficulty,
            ingredients,
            notes,
            categories,
        } = recipe;

        let existing = match id {
            Some(id) => recipe::Entity::find_by_id(id).one(db).await?,
            None => None,
        };

        let mut active_model = recipe::ActiveModel {
            description: Set(description),
            prep_time: Set(prep_time),
            cook_time: Set(cook_time),
            servings: Set(servings),
            source: Set(source),
            url: Set(url),
            directions: Set(directions),
            image: Set(image),
            difficulty: Set(difficulty),
            ..Default::default()
        };

        let saved = match existing {
            Some(model) => {
                active_model.id = ActiveValue::Unchanged(model.id);
                active_model.update(db).await?
            }
            None => active_model.insert(db).await?,
        };

        Self::merge_ingredients(db, saved.id, &ingredients).await?;
        Self::merge_notes(db, saved.id, notes.as_ref()).await?;
        Self::replace_categories(db, saved.id, &categories).await?;
        debug!(recipe_id = saved.id, "saved recipe");

        Self::find_by_id(db, saved.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("recipe {} missing right after save", saved.id))
        })
    }

    pub async fn save_all<C>(db: &C, recipes: Vec<Recipe>) -> Result<Vec<Recipe>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut saved = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            saved.push(Self::save(db, recipe).await?);
        }
        Ok(saved)
    }

    /// Deletes the recipe and every row it owns. Category rows stay untouched.
    /// Returns the number of recipe rows removed, zero for an unknown id.
    pub async fn delete_by_id<C>(db: &C, id: i32) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        recipe_category::Entity::delete_many()
            .filter(recipe_category::Column::RecipeId.eq(id))
            .exec(db)
            .await?;
        ingredient::Entity::delete_many()
            .filter(ingredient::Column::RecipeId.eq(id))
            .exec(db)
            .await?;
        notes::Entity::delete_many()
            .filter(notes::Column::RecipeId.eq(id))
            .exec(db)
            .await?;

        let result = recipe::Entity::delete_by_id(id).exec(db).await?;
        debug!(recipe_id = id, rows = result.rows_affected, "deleted recipe");

        Ok(result.rows_affected)
    }

    async fn assemble<C>(db: &C, models: Vec<recipe::Model>) -> Result<Vec<Recipe>, DbErr>
    where
        C: ConnectionTrait,
    {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let recipe_ids: Vec<i32> = models.iter().map(|model| model.id).collect();

        let ingredients = models
            .load_many(
                ingredient::Entity::find().order_by_asc(ingredient::Column::Id),
                db,
            )
            .await?;

        let uom_ids: HashSet<i32> = ingredients
            .iter()
            .flatten()
            .map(|ingredient| ingredient.uom_id)
            .collect();
        let units: HashMap<i32, UnitOfMeasure> = unit_of_measure::Entity::find()
            .filter(unit_of_measure::Column::Id.is_in(uom_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|uom| (uom.id, uom.into()))
            .collect();

        let mut notes: HashMap<i32, Notes> = notes::Entity::find()
            .filter(notes::Column::RecipeId.is_in(recipe_ids.clone()))
            .all(db)
            .await?
            .into_iter()
            .map(|notes| (notes.recipe_id, notes.into()))
            .collect();

        let mut categories: HashMap<i32, Vec<Category>> = HashMap::new();
        for (link, category) in recipe_category::Entity::find()
            .filter(recipe_category::Column::RecipeId.is_in(recipe_ids))
            .order_by_asc(recipe_category::Column::CategoryId)
            .find_also_related(category::Entity)
            .all(db)
            .await?
        {
            if let Some(category) = category {
                categories
                    .entry(link.recipe_id)
                    .or_default()
                    .push(category.into());
            }
        }

        Ok(models
            .into_iter()
            .zip(ingredients)
            .map(|(model, ingredients)| Recipe {
                id: Some(model.id),
                description: model.description,
                prep_time: model.prep_time,
                cook_time: model.cook_time,
                servings: model.servings,
                source: model.source,
                url: model.url,
                directions: model.directions,
                image: model.image,
                difficulty: model.difficulty,
                ingredients: ingredients
                    .into_iter()
                    .map(|ingredient| Ingredient {
                        id: Some(ingredient.id),
                        description: ingredient.description,
                        amount: ingredient.amount,
                        uom: units.get(&ingredient.uom_id).cloned(),
                        recipe_id: Some(ingredient.recipe_id),
                    })
                    .collect(),
                notes: notes.remove(&model.id),
                categories: categories.remove(&model.id).unwrap_or_default(),
            })
            .collect())
    }

    async fn merge_ingredients<C>(
        db: &C,
        recipe_id: i32,
        ingredients: &[Ingredient],
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let stored: HashSet<i32> = ingredient::Entity::find()
            .filter(ingredient::Column::RecipeId.eq(recipe_id))
            .all(db)
            .await?
            .into_iter()
            .map(|ingredient| ingredient.id)
            .collect();

        let retained: Vec<i32> = ingredients
            .iter()
            .filter_map(|ingredient| ingredient.id)
            .filter(|id| stored.contains(id))
            .collect();

        ingredient::Entity::delete_many()
            .filter(ingredient::Column::RecipeId.eq(recipe_id))
            .filter(ingredient::Column::Id.is_not_in(retained))
            .exec(db)
            .await?;

        for ingredient in ingredients {
            let uom_id = ingredient.uom_id().ok_or_else(|| {
                DbErr::Custom(format!(
                    "ingredient {:?} of recipe {recipe_id} has no unit of measure",
                    ingredient.description
                ))
            })?;

            let mut active_model = ingredient::ActiveModel {
                description: Set(ingredient.description.clone()),
                amount: Set(ingredient.amount),
                uom_id: Set(uom_id),
                recipe_id: Set(recipe_id),
                ..Default::default()
            };

            match ingredient.id.filter(|id| stored.contains(id)) {
                Some(id) => {
                    active_model.id = ActiveValue::Unchanged(id);
                    active_model.update(db).await?;
                }
                None => {
                    active_model.insert(db).await?;
                }
            }
        }

        Ok(())
    }

    async fn merge_notes<C>(db: &C, recipe_id: i32, notes: Option<&Notes>) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let stored = notes::Entity::find()
            .filter(notes::Column::RecipeId.eq(recipe_id))
            .one(db)
            .await?;

        match (notes, stored) {
            (Some(notes), Some(stored)) => {
                notes::ActiveModel {
                    id: ActiveValue::Unchanged(stored.id),
                    recipe_id: ActiveValue::Unchanged(recipe_id),
                    recipe_notes: Set(notes.recipe_notes.clone()),
                }
                .update(db)
                .await?;
            }
            (Some(notes), None) => {
                notes::ActiveModel {
                    recipe_id: Set(recipe_id),
                    recipe_notes: Set(notes.recipe_notes.clone()),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
            (None, Some(stored)) => {
                notes::Entity::delete_by_id(stored.id).exec(db).await?;
            }
            (None, None) => {}
        }

        Ok(())
    }

    async fn replace_categories<C>(
        db: &C,
        recipe_id: i32,
        categories: &[Category],
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        recipe_category::Entity::delete_many()
            .filter(recipe_category::Column::RecipeId.eq(recipe_id))
            .exec(db)
            .await?;

        let mut linked = HashSet::new();
        for category in categories {
            let category_id = category.id.ok_or_else(|| {
                DbErr::Custom(format!(
                    "category {:?} has no id and cannot be linked to recipe {recipe_id}",
                    category.description
                ))
            })?;

            if linked.insert(category_id) {
                recipe_category::Entity::insert(recipe_category::ActiveModel {
                    recipe_id: Set(recipe_id),
                    category_id: Set(category_id),
                })
                .exec_without_returning(db)
                .await?;
            }
        }

        Ok(())
    }
}
