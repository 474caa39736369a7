use crate::{
    commands::{CategoryCommand, IngredientCommand, NotesCommand, RecipeCommand},
    domain::{Category, Ingredient, Notes, Recipe},
};

impl From<&Recipe> for RecipeCommand {
    fn from(source: &Recipe) -> Self {
        Self {
            id: source.id,
            description: source.description.clone(),
            prep_time: source.prep_time,
            cook_time: source.cook_time,
            servings: source.servings,
            source: source.source.clone(),
            url: source.url.clone(),
            directions: source.directions.clone(),
            ingredients: source
                .ingredients
                .iter()
                .map(IngredientCommand::from)
                .collect(),
            difficulty: source.difficulty,
            notes: source.notes.as_ref().map(NotesCommand::from),
            categories: source.categories.iter().map(CategoryCommand::from).collect(),
            image: source.image.clone(),
        }
    }
}

impl From<&RecipeCommand> for Recipe {
    fn from(source: &RecipeCommand) -> Self {
        let mut recipe = Self {
            id: source.id,
            description: source.description.clone(),
            prep_time: source.prep_time,
            cook_time: source.cook_time,
            servings: source.servings,
            source: source.source.clone(),
            url: source.url.clone(),
            directions: source.directions.clone(),
            image: source.image.clone(),
            difficulty: source.difficulty,
            categories: source.categories.iter().map(Category::from).collect(),
            ..Default::default()
        };

        if let Some(notes) = &source.notes {
            recipe.set_notes(Notes::from(notes));
        }
        for ingredient in &source.ingredients {
            recipe.add_ingredient(Ingredient::from(ingredient));
        }

        recipe
    }
}
