use ::entity::{category, category::Entity as CategoryEntity};
use sea_orm::*;

use crate::domain::Category;

pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn find_by_id<C>(db: &C, id: i32) -> Result<Option<Category>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(CategoryEntity::find_by_id(id)
            .one(db)
            .await?
            .map(Into::into))
    }

    /// Looks a category up by its description. More than one match is a data defect
    /// and is reported instead of picking one.
    pub async fn find_by_description<C>(
        db: &C,
        description: &str,
    ) -> Result<Option<Category>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut found = CategoryEntity::find()
            .filter(category::Column::Description.eq(description))
            .all(db)
            .await?;

        if found.len() > 1 {
            return Err(DbErr::Custom(format!(
                "{} categories share the description {description:?}",
                found.len()
            )));
        }

        Ok(found.pop().map(Into::into))
    }

    pub async fn find_all<C>(db: &C) -> Result<Vec<Category>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(CategoryEntity::find()
            .order_by_asc(category::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Inserts the category when it has no id (or an unknown one), updates it otherwise.
    pub async fn save<C>(db: &C, entry: Category) -> Result<Category, DbErr>
    where
        C: ConnectionTrait,
    {
        let existing = match entry.id {
            Some(id) => CategoryEntity::find_by_id(id).one(db).await?,
            None => None,
        };

        let mut active_model = category::ActiveModel {
            description: Set(entry.description.unwrap_or_default()),
            ..Default::default()
        };

        let saved = match existing {
            Some(model) => {
                active_model.id = ActiveValue::Unchanged(model.id);
                active_model.update(db).await?
            }
            None => active_model.insert(db).await?,
        };

        Ok(saved.into())
    }
}
