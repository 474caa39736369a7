use crate::{commands::NotesCommand, domain::Notes};

impl From<&Notes> for NotesCommand {
    fn from(source: &Notes) -> Self {
        Self {
            id: source.id,
            recipe_notes: source.recipe_notes.clone(),
        }
    }
}

/// The owning recipe is attached by the recipe conversion.
impl From<&NotesCommand> for Notes {
    fn from(source: &NotesCommand) -> Self {
        Self {
            id: source.id,
            recipe_id: None,
            recipe_notes: source.recipe_notes.clone(),
        }
    }
}
