use crate::{commands::CategoryCommand, domain::Category};

impl From<&Category> for CategoryCommand {
    fn from(source: &Category) -> Self {
        Self {
            id: source.id,
            description: source.description.clone(),
        }
    }
}

impl From<&CategoryCommand> for Category {
    fn from(source: &CategoryCommand) -> Self {
        Self {
            id: source.id,
            description: source.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copies_fields_both_ways() {
        let category = Category {
            id: Some(1),
            description: Some("American".to_owned()),
        };

        let command = CategoryCommand::from(&category);
        assert_eq!(command.id, Some(1));
        assert_eq!(command.description.as_deref(), Some("American"));
        assert_eq!(Category::from(&command), category);
    }

    #[test]
    fn absent_source_stays_absent() {
        let source: Option<&CategoryCommand> = None;
        assert_eq!(source.map(Category::from), None);
    }
}
