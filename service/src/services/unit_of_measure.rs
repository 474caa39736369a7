use sea_orm::DatabaseConnection;

use crate::{ServiceError, commands::UnitOfMeasureCommand, repository::UnitOfMeasureRepository};

#[derive(Debug)]
pub struct UnitOfMeasureService {
    db: DatabaseConnection,
}

impl UnitOfMeasureService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all_uoms(&self) -> Result<Vec<UnitOfMeasureCommand>, ServiceError> {
        Ok(UnitOfMeasureRepository::find_all(&self.db)
            .await?
            .iter()
            .map(UnitOfMeasureCommand::from)
            .collect())
    }
}
