use crate::{commands::UnitOfMeasureCommand, domain::UnitOfMeasure};

impl From<&UnitOfMeasure> for UnitOfMeasureCommand {
    fn from(source: &UnitOfMeasure) -> Self {
        Self {
            id: source.id,
            description: source.description.clone(),
        }
    }
}

impl From<&UnitOfMeasureCommand> for UnitOfMeasure {
    fn from(source: &UnitOfMeasureCommand) -> Self {
        Self {
            id: source.id,
            description: source.description.clone(),
        }
    }
}
