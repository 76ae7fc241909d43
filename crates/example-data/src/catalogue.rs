//! Fixed sample data for previews and demos.
//!
//! Three hand-written recipes owned by one sample user. Identifiers are
//! stable so fixtures and snapshots can refer to them.

use uuid::Uuid;

use crate::seed::{ExampleRecipeSeed, ExampleUserSeed};

/// Identifier of the sample user.
pub const SAMPLE_USER_ID: Uuid = Uuid::from_u128(0x660e_8400_e29b_41d4_a716_4466_5544_0000);

const COOKIES_ID: Uuid = Uuid::from_u128(0x550e_8400_e29b_41d4_a716_4466_5544_0000);
const CARBONARA_ID: Uuid = Uuid::from_u128(0x550e_8400_e29b_41d4_a716_4466_5544_0001);
const CAESAR_ID: Uuid = Uuid::from_u128(0x550e_8400_e29b_41d4_a716_4466_5544_0002);

/// The sample user who owns every catalogue recipe.
///
/// # Example
///
/// ```
/// use example_data::sample_user;
///
/// let user = sample_user();
/// assert_eq!(user.name, "John Doe");
/// assert_eq!(user.id.to_string(), "660e8400-e29b-41d4-a716-446655440000");
/// ```
#[must_use]
pub fn sample_user() -> ExampleUserSeed {
    ExampleUserSeed {
        id: SAMPLE_USER_ID,
        google_id: "123456789".to_owned(),
        email: "john.doe@example.com".to_owned(),
        name: "John Doe".to_owned(),
        picture: Some("https://example.com/avatar.jpg".to_owned()),
    }
}

/// The three catalogue recipes, in display order.
///
/// All are stamped "now" (zero days old).
#[must_use]
pub fn sample_recipes() -> Vec<ExampleRecipeSeed> {
    vec![chocolate_chip_cookies(), spaghetti_carbonara(), caesar_salad()]
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|&item| item.to_owned()).collect()
}

fn chocolate_chip_cookies() -> ExampleRecipeSeed {
    ExampleRecipeSeed {
        id: COOKIES_ID,
        name: "Chocolate Chip Cookies".to_owned(),
        description: Some(
            "Classic homemade chocolate chip cookies that are crispy on the outside and chewy \
             on the inside."
                .to_owned(),
        ),
        ingredients: lines(&[
            "2 cups all-purpose flour",
            "1 tsp baking soda",
            "1 cup butter, softened",
            "3/4 cup granulated sugar",
            "3/4 cup packed brown sugar",
            "2 large eggs",
            "2 tsp vanilla extract",
            "2 cups chocolate chips",
        ]),
        instructions: lines(&[
            "Preheat oven to 375°F (190°C)",
            "Mix flour and baking soda in a bowl",
            "In another bowl, cream butter and sugars until fluffy",
            "Beat in eggs and vanilla extract",
            "Gradually blend in the flour mixture",
            "Fold in chocolate chips",
            "Drop rounded tablespoons of dough onto ungreased cookie sheets",
            "Bake for 10-12 minutes or until golden brown",
            "Cool on baking sheet for 2 minutes before transferring to wire rack",
        ]),
        prep_time: 15,
        cook_time: 12,
        servings: 24,
        tags: lines(&["dessert", "cookies", "baking", "chocolate"]),
        image: None,
        is_favorite: true,
        created_days_ago: 0,
        updated_days_ago: 0,
    }
}

fn spaghetti_carbonara() -> ExampleRecipeSeed {
    ExampleRecipeSeed {
        id: CARBONARA_ID,
        name: "Spaghetti Carbonara".to_owned(),
        description: Some(
            "Traditional Italian pasta dish with eggs, cheese, and pancetta".to_owned(),
        ),
        ingredients: lines(&[
            "1 lb spaghetti",
            "4 large eggs",
            "1 cup grated Parmesan cheese",
            "8 oz pancetta or bacon, diced",
            "4 cloves garlic, minced",
            "Salt and black pepper to taste",
            "Fresh parsley for garnish",
        ]),
        instructions: lines(&[
            "Cook spaghetti according to package directions",
            "Whisk eggs and Parmesan cheese together",
            "Cook pancetta until crispy",
            "Add garlic and cook for 1 minute",
            "Drain pasta, reserving 1 cup pasta water",
            "Toss hot pasta with pancetta",
            "Remove from heat and quickly stir in egg mixture",
            "Add pasta water as needed for creamy consistency",
            "Season with salt and pepper, garnish with parsley",
        ]),
        prep_time: 10,
        cook_time: 20,
        servings: 4,
        tags: lines(&["pasta", "italian", "dinner"]),
        image: None,
        is_favorite: false,
        created_days_ago: 0,
        updated_days_ago: 0,
    }
}

fn caesar_salad() -> ExampleRecipeSeed {
    ExampleRecipeSeed {
        id: CAESAR_ID,
        name: "Caesar Salad".to_owned(),
        description: Some("Crisp romaine lettuce with homemade Caesar dressing".to_owned()),
        ingredients: lines(&[
            "1 head romaine lettuce, chopped",
            "1/2 cup Parmesan cheese, shaved",
            "1 cup croutons",
            "2 cloves garlic",
            "2 anchovy fillets",
            "1 egg yolk",
            "2 tbsp lemon juice",
            "1 tsp Dijon mustard",
            "1/2 cup olive oil",
        ]),
        instructions: lines(&[
            "Make dressing: blend garlic, anchovies, egg yolk, lemon juice, and mustard",
            "Slowly drizzle in olive oil while blending",
            "Toss lettuce with dressing",
            "Top with Parmesan and croutons",
            "Serve immediately",
        ]),
        prep_time: 15,
        cook_time: 0,
        servings: 4,
        tags: lines(&["salad", "vegetarian", "side dish"]),
        image: None,
        is_favorite: true,
        created_days_ago: 0,
        updated_days_ago: 0,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::validation::is_valid_recipe_seed;

    #[test]
    fn catalogue_ids_are_stable() {
        let ids: Vec<String> = sample_recipes().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(
            ids,
            [
                "550e8400-e29b-41d4-a716-446655440000",
                "550e8400-e29b-41d4-a716-446655440001",
                "550e8400-e29b-41d4-a716-446655440002",
            ]
        );
    }

    #[rstest]
    #[case(0, "Chocolate Chip Cookies", 8, 9)]
    #[case(1, "Spaghetti Carbonara", 7, 9)]
    #[case(2, "Caesar Salad", 9, 5)]
    fn catalogue_entries_have_expected_shape(
        #[case] position: usize,
        #[case] name: &str,
        #[case] ingredients: usize,
        #[case] steps: usize,
    ) {
        let recipes = sample_recipes();
        let recipe = recipes.get(position).expect("catalogue entry");
        assert_eq!(recipe.name, name);
        assert_eq!(recipe.ingredients.len(), ingredients);
        assert_eq!(recipe.instructions.len(), steps);
    }

    #[test]
    fn catalogue_recipes_satisfy_bounds() {
        for recipe in sample_recipes() {
            assert!(is_valid_recipe_seed(&recipe), "{} out of bounds", recipe.name);
        }
    }
}
