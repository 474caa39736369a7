use ::entity::{unit_of_measure, unit_of_measure::Entity as UnitOfMeasureEntity};
use sea_orm::*;

use crate::domain::UnitOfMeasure;

pub struct UnitOfMeasureRepository;

impl UnitOfMeasureRepository {
    pub async fn find_by_id<C>(db: &C, id: i32) -> Result<Option<UnitOfMeasure>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(UnitOfMeasureEntity::find_by_id(id)
            .one(db)
            .await?
            .map(Into::into))
    }

    /// Looks a unit up by its description. More than one match is a data defect
    /// and is reported instead of picking one.
    pub async fn find_by_description<C>(
        db: &C,
        description: &str,
    ) -> Result<Option<UnitOfMeasure>, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut found = UnitOfMeasureEntity::find()
            .filter(unit_of_measure::Column::Description.eq(description))
            .all(db)
            .await?;

        if found.len() > 1 {
            return Err(DbErr::Custom(format!(
                "{} units of measure share the description {description:?}",
                found.len()
            )));
        }

        Ok(found.pop().map(Into::into))
    }

    pub async fn find_all<C>(db: &C) -> Result<Vec<UnitOfMeasure>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(UnitOfMeasureEntity::find()
            .order_by_asc(unit_of_measure::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Inserts the unit when it has no id (or an unknown one), updates it otherwise.
    pub async fn save<C>(db: &C, uom: UnitOfMeasure) -> Result<UnitOfMeasure, DbErr>
    where
        C: ConnectionTrait,
    {
        let existing = match uom.id {
            Some(id) => UnitOfMeasureEntity::find_by_id(id).one(db).await?,
            None => None,
        };

        let mut active_model = unit_of_measure::ActiveModel {
            description: Set(uom.description.unwrap_or_default()),
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
