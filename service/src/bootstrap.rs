//! Sample recipes loaded into an empty store at startup.

use entity::sea_orm_active_enums::Difficulty;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait, prelude::Decimal};
use tracing::{debug, info};

use crate::{
    ServiceError,
    domain::{Category, Ingredient, Notes, Recipe, UnitOfMeasure},
    repository::{CategoryRepository, RecipeRepository, UnitOfMeasureRepository},
};

const GUACAMOLE_DIRECTIONS: &str = "\
1 Cut avocado, remove flesh: Cut the avocados in half. Remove seed. Score the inside of the avocado with a blunt knife and scoop out the flesh with a spoon.
2 Mash with a fork: Using a fork, roughly mash the avocado. (Don't overdo it! The guacamole should be a little chunky.)
3 Add salt, lime juice, and the rest: Sprinkle with salt and lime (or lemon) juice. The acid in the lime juice will provide some balance to the richness of the avocado and will help delay the avocados from turning brown.
Add the chopped onion, cilantro, black pepper, and chiles. Chili peppers vary individually in their hotness. So, start with a half of one chili pepper and add to the guacamole to your desired degree of hotness.
Remember that much of this is done to taste because of the variability in the fresh ingredients. Start with this recipe and adjust to your taste.
4 Cover with plastic and chill to store: Place plastic wrap on the surface of the guacamole cover it and to prevent air reaching it. (The oxygen in the air causes oxidation which will turn the guacamole brown.) Refrigerate until ready to serve.
Chilling tomatoes hurts their flavor, so if you want to add chopped tomato to your guacamole, add it just before serving.

Read more: http://www.simplyrecipes.com/recipes/perfect_guacamole/#ixzz4jvpiV9Sd";

const GUACAMOLE_NOTES: &str = "\
For a very quick guacamole just take a 1/4 cup of salsa and mix it in with your mashed avocados.
Feel free to experiment! One classic Mexican guacamole has pomegranate seeds and chunks of peaches in it (a Diana Kennedy favorite). Try guacamole with added pineapple, mango, or strawberries.
The simplest version of guacamole is just mashed avocados with salt. Don't let the lack of availability of other ingredients stop you from making guacamole.
To extend a limited supply of avocados, add either sour cream or cottage cheese to your guacamole dip. Purists may be horrified, but so what? It tastes great.

Read more: http://www.simplyrecipes.com/recipes/perfect_guacamole/#ixzz4jvoun5ws";

const TACOS_DIRECTIONS: &str = "\
1 Prepare a gas or charcoal grill for medium-high, direct heat.
2 Make the marinade and coat the chicken: In a large bowl, stir together the chili powder, oregano, cumin, sugar, salt, garlic and orange zest. Stir in the orange juice and olive oil to make a loose paste. Add the chicken to the bowl and toss to coat all over.
Set aside to marinate while the grill heats and you prepare the rest of the toppings.
3 Grill the chicken: Grill the chicken for 3 to 4 minutes per side, or until a thermometer inserted into the thickest part of the meat registers 165F. Transfer to a plate and rest for 5 minutes.
4 Warm the tortillas: Place each tortilla on the grill or on a hot, dry skillet over medium-high heat. As soon as you see pockets of the air start to puff up in the tortilla, turn it with tongs and heat for a few seconds on the other side.
Wrap warmed tortillas in a tea towel to keep them warm until serving.
5 Assemble the tacos: Slice the chicken into strips. On each tortilla, place a small handful of arugula. Top with chicken slices, sliced avocado, radishes, tomatoes, and onion slices. Drizzle with the thinned sour cream. Serve with lime wedges.

Read more: http://www.simplyrecipes.com/recipes/spicy_grilled_chicken_tacos/#ixzz4jvtrAnNm";

const TACOS_NOTES: &str = "\
We have a family motto and it is this: Everything goes better in a tortilla.
Any and every kind of leftover can go inside a warm tortilla, usually with a healthy dose of pickled jalapenos. I can always sniff out a late-night snacker when the aroma of tortillas heating in a hot pan on the stove comes wafting through the house.
Today's tacos are more purposeful, a deliberate meal instead of a secretive midnight snack!
First, I marinate the chicken briefly in a spicy paste of ancho chile powder, oregano, cumin, and sweet orange juice while the grill is heating. You can also use this time to prepare the taco toppings.
Grill the chicken, then let it rest while you warm the tortillas. Now you are ready to assemble the tacos and dig in. The whole meal comes together in about 30 minutes!

Read more: http://www.simplyrecipes.com/recipes/spicy_grilled_chicken_tacos/#ixzz4jvu7Q0MJ";

/// Units of measure and categories the sample recipes refer to.
struct Lookups {
    each: UnitOfMeasure,
    tablespoon: UnitOfMeasure,
    teaspoon: UnitOfMeasure,
    dash: UnitOfMeasure,
    pint: UnitOfMeasure,
    cup: UnitOfMeasure,
    american: Category,
    mexican: Category,
}

impl Lookups {
    async fn load<C>(db: &C) -> Result<Self, ServiceError>
    where
        C: ConnectionTrait,
    {
        Ok(Self {
            each: uom(db, "Each").await?,
            tablespoon: uom(db, "Tablespoon").await?,
            teaspoon: uom(db, "Teaspoon").await?,
            dash: uom(db, "Dash").await?,
            pint: uom(db, "Pint").await?,
            cup: uom(db, "Cup").await?,
            american: category(db, "American").await?,
            mexican: category(db, "Mexican").await?,
        })
    }
}

async fn uom<C>(db: &C, description: &str) -> Result<UnitOfMeasure, ServiceError>
where
    C: ConnectionTrait,
{
    UnitOfMeasureRepository::find_by_description(db, description)
        .await?
        .ok_or_else(|| ServiceError::MissingUnitOfMeasure(description.to_owned()))
}

async fn category<C>(db: &C, description: &str) -> Result<Category, ServiceError>
where
    C: ConnectionTrait,
{
    CategoryRepository::find_by_description(db, description)
        .await?
        .ok_or_else(|| ServiceError::MissingCategory(description.to_owned()))
}

/// Seeds the guacamole and chicken taco recipes.
#[derive(Debug)]
pub struct RecipeBootstrap {
    db: DatabaseConnection,
}

impl RecipeBootstrap {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves the sample recipes in one transaction. Does nothing when the store
    /// already holds recipes. Fails when a required unit or category is missing.
    pub async fn load(&self) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        let existing = RecipeRepository::count(&txn).await?;
        if existing > 0 {
            info!(existing, "recipes present, skipping bootstrap data");
            return Ok(());
        }

        let lookups = Lookups::load(&txn).await?;
        let saved = RecipeRepository::save_all(&txn, recipes(&lookups)).await?;

        txn.commit().await?;
        debug!(count = saved.len(), "Loading Bootstrap Data");

        Ok(())
    }
}

fn recipes(lookups: &Lookups) -> Vec<Recipe> {
    vec![guacamole(lookups), tacos(lookups)]
}

fn guacamole(lookups: &Lookups) -> Recipe {
    let Lookups {
        each,
        tablespoon,
        teaspoon,
        dash,
        american,
        mexican,
        ..
    } = lookups;

    let mut recipe = Recipe {
        description: Some("Perfect Guacamole".to_owned()),
        prep_time: Some(10),
        cook_time: None,
        servings: Some(4),
        source: Some("Simply Recipes".to_owned()),
        url: Some("http://www.simplyrecipes.com/recipes/perfect_guacamole/".to_owned()),
        directions: Some(GUACAMOLE_DIRECTIONS.to_owned()),
        difficulty: Some(Difficulty::Easy),
        categories: vec![american.clone(), mexican.clone()],
        ..Default::default()
    };

    recipe
        .set_notes(Notes::new(GUACAMOLE_NOTES))
        .add_ingredient(Ingredient::new("ripe avocados", Decimal::from(2), each.clone()))
        .add_ingredient(Ingredient::new("Kosher salt", Decimal::new(5, 1), teaspoon.clone()))
        .add_ingredient(Ingredient::new(
            "fresh lime juice or lemon juice",
            Decimal::from(2),
            tablespoon.clone(),
        ))
        .add_ingredient(Ingredient::new(
            "minced red onion or thinly sliced green onion",
            Decimal::from(2),
            tablespoon.clone(),
        ))
        .add_ingredient(Ingredient::new(
            "serrano chiles, stems and seeds removed, minced",
            Decimal::from(2),
            each.clone(),
        ))
        .add_ingredient(Ingredient::new("Cilantro", Decimal::from(2), tablespoon.clone()))
        .add_ingredient(Ingredient::new(
            "freshly grated black pepper",
            Decimal::from(2),
            dash.clone(),
        ))
        .add_ingredient(Ingredient::new(
            "ripe tomato, seeds and pulp removed, chopped",
            Decimal::new(5, 1),
            each.clone(),
        ));

    recipe
}

fn tacos(lookups: &Lookups) -> Recipe {
    let Lookups {
        each,
        tablespoon,
        teaspoon,
        pint,
        cup,
        american,
        mexican,
        ..
    } = lookups;

    let mut recipe = Recipe {
        description: Some("Spicy Grilled Chicken Taco".to_owned()),
        prep_time: Some(20),
        cook_time: Some(9),
        servings: Some(4),
        source: Some("Simply Recipes".to_owned()),
        url: Some("http://www.simplyrecipes.com/recipes/spicy_grilled_chicken_tacos/".to_owned()),
        directions: Some(TACOS_DIRECTIONS.to_owned()),
        difficulty: Some(Difficulty::Moderate),
        categories: vec![american.clone(), mexican.clone()],
        ..Default::default()
    };

    recipe.set_notes(Notes::new(TACOS_NOTES));

    let ingredients = [
        ("Ancho Chili Powder", Decimal::from(2), tablespoon),
        ("Dried Oregano", Decimal::from(1), teaspoon),
        ("Dried Cumin", Decimal::from(1), teaspoon),
        ("Sugar", Decimal::from(1), teaspoon),
        ("Salt", Decimal::new(5, 1), teaspoon),
        ("Clove of Garlic, Chopped", Decimal::from(1), each),
        ("finely grated orange zest", Decimal::from(1), tablespoon),
        ("fresh-squeezed orange juice", Decimal::from(3), tablespoon),
        ("Olive Oil", Decimal::from(2), tablespoon),
        ("boneless chicken thighs", Decimal::from(4), each),
        ("small corn tortillas", Decimal::from(8), each),
        ("packed baby arugula", Decimal::from(3), cup),
        ("medium ripe avocados, sliced", Decimal::from(2), each),
        ("radishes, thinly sliced", Decimal::from(4), each),
        ("cherry tomatoes, halved", Decimal::new(5, 1), pint),
        ("red onion, thinly sliced", Decimal::new(25, 2), each),
        ("Roughly chopped cilantro", Decimal::from(4), each),
        ("cup sour cream thinned with 1/4 cup milk", Decimal::from(4), cup),
        ("lime, cut into wedges", Decimal::from(4), each),
    ];
    for (description, amount, uom) in ingredients {
        recipe.add_ingredient(Ingredient::new(description, amount, uom.clone()));
    }

    recipe
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unit(id: i32, description: &str) -> UnitOfMeasure {
        UnitOfMeasure {
            id: Some(id),
            description: Some(description.to_owned()),
        }
    }

    fn lookups() -> Lookups {
        Lookups {
            teaspoon: unit(1, "Teaspoon"),
            tablespoon: unit(2, "Tablespoon"),
            cup: unit(3, "Cup"),
            each: unit(6, "Each"),
            dash: unit(7, "Dash"),
            pint: unit(8, "Pint"),
            american: Category {
                id: Some(1),
                description: Some("American".to_owned()),
            },
            mexican: Category {
                id: Some(3),
                description: Some("Mexican".to_owned()),
            },
        }
    }

    #[test]
    fn sample_recipes_use_the_intended_units() {
        let recipes = recipes(&lookups());
        assert_eq!(recipes.len(), 2);

        let guacamole = &recipes[0];
        assert_eq!(guacamole.ingredients.len(), 8);
        let salt = &guacamole.ingredients[1];
        assert_eq!(salt.description.as_deref(), Some("Kosher salt"));
        assert_eq!(salt.uom_id(), Some(1));
        let pepper = &guacamole.ingredients[6];
        assert_eq!(pepper.uom_id(), Some(7));

        let tacos = &recipes[1];
        assert_eq!(tacos.ingredients.len(), 19);
        let tomatoes = &tacos.ingredients[14];
        assert_eq!(tomatoes.description.as_deref(), Some("cherry tomatoes, halved"));
        assert_eq!(tomatoes.uom_id(), Some(8));
        assert_eq!(tacos.categories.len(), 2);
        assert!(tacos.notes.is_some());
    }
}
