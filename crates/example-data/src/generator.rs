//! Deterministic recipe generation from seed definitions.
//!
//! The same seed definition always produces an identical owner and recipe
//! list. Recipes are assembled from fixed vocabularies so they read like
//! real dishes and always stay inside the recipe bounds.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::{ExampleDataSet, ExampleRecipeSeed, ExampleUserSeed};
use crate::validation::{email_local_part, is_valid_recipe_seed};

/// Maximum number of attempts to generate a usable owner name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Largest recipe count a single generation run accepts.
pub const MAX_RECIPE_COUNT: usize = 1000;

const MIN_TAGS: usize = 1;
const MAX_TAGS: usize = 3;
const MIN_INGREDIENTS: usize = 3;
const MAX_INGREDIENTS: usize = 8;
const MIN_STEPS: usize = 2;
const MAX_STEPS: usize = 6;

/// Oldest generated recipe, in days.
const MAX_AGE_DAYS: u16 = 365;

/// One recipe in four is a favourite.
const FAVORITE_NUMERATOR: u32 = 1;
const FAVORITE_DENOMINATOR: u32 = 4;

/// Three recipes in four carry a description.
const DESCRIPTION_NUMERATOR: u32 = 3;
const DESCRIPTION_DENOMINATOR: u32 = 4;

/// One recipe in three has an image.
const IMAGE_NUMERATOR: u32 = 1;
const IMAGE_DENOMINATOR: u32 = 3;

const ADJECTIVES: &[&str] = &[
    "Rustic", "Smoky", "Zesty", "Creamy", "Spiced", "Golden", "Herby", "Roasted", "Crispy",
    "Hearty",
];

const STAPLES: &[&str] = &[
    "Chickpea", "Mushroom", "Chicken", "Lentil", "Salmon", "Pumpkin", "Tomato", "Beef",
    "Aubergine", "Prawn",
];

const DISHES: &[&str] = &[
    "Stew", "Curry", "Risotto", "Tart", "Soup", "Salad", "Bake", "Pie", "Tacos", "Noodles",
];

const QUANTITIES: &[&str] = &[
    "1", "2", "3", "1/2 cup", "1 cup", "2 tbsp", "1 tsp", "200 g", "400 g", "a pinch of",
];

const INGREDIENTS: &[&str] = &[
    "onion, diced",
    "garlic cloves, crushed",
    "olive oil",
    "vegetable stock",
    "tinned tomatoes",
    "smoked paprika",
    "ground cumin",
    "fresh thyme",
    "lemon, juiced",
    "double cream",
    "grated Parmesan",
    "sea salt",
    "black pepper",
    "unsalted butter",
    "plain flour",
    "spring onions, sliced",
];

const STEPS: &[&str] = &[
    "Prepare and measure all ingredients",
    "Heat the oil in a large pan over a medium heat",
    "Soften the onion and garlic for 5 minutes",
    "Stir in the spices and cook until fragrant",
    "Add the remaining ingredients and bring to a simmer",
    "Cover and cook until tender",
    "Season to taste with salt and pepper",
    "Rest for a few minutes before serving",
];

const DESCRIPTIONS: &[&str] = &[
    "A weeknight favourite that comes together with very little fuss.",
    "Comforting, generous and easy to scale up for a crowd.",
    "Bright flavours with a gentle warmth from the spices.",
    "Best made a day ahead so the flavours can settle.",
];

/// Generates an owner and their recipes from a seed definition.
///
/// Uses the seed's `seed` value to initialise a deterministic RNG, ensuring
/// identical output for the same seed definition. Generated recipes have:
///
/// - Unique UUIDs (deterministically generated)
/// - Names built from an adjective, a staple and a dish
/// - 3-8 ingredients and 2-6 steps
/// - 1-3 tags drawn from the registry
/// - Creation dates up to a year back, updates no earlier than creation
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - The registry has no tags
/// - Owner name generation fails after maximum retries
/// - A generated recipe falls outside the recipe bounds
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_data};
///
/// let json = r#"{
///     "version": 1,
///     "tags": ["dinner"],
///     "seeds": [{"name": "test", "seed": 42, "recipeCount": 3}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let data = generate_example_data(&registry, seed_def).expect("generated");
///
/// assert_eq!(data.recipes.len(), 3);
/// let again = generate_example_data(&registry, seed_def).expect("generated");
/// assert_eq!(data, again);
/// ```
pub fn generate_example_data(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<ExampleDataSet, GenerationError> {
    if registry.tags().is_empty() {
        return Err(GenerationError::NoTags);
    }
    if seed_def.recipe_count() > MAX_RECIPE_COUNT {
        return Err(GenerationError::TooManyRecipes {
            requested: seed_def.recipe_count(),
            max: MAX_RECIPE_COUNT,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let owner = generate_owner(&mut rng)?;
    let mut recipes = Vec::new();

    for index in 0..seed_def.recipe_count() {
        let recipe = generate_single_recipe(&mut rng, registry.tags());
        if !is_valid_recipe_seed(&recipe) {
            return Err(GenerationError::InvalidRecipe { index });
        }
        recipes.push(recipe);
    }

    Ok(ExampleDataSet { owner, recipes })
}

/// Generates the owner with a name that yields a usable email address.
fn generate_owner(rng: &mut ChaCha8Rng) -> Result<ExampleUserSeed, GenerationError> {
    let id = Uuid::from_u128(rng.random());

    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let name = format!("{first} {last}");
        let local = email_local_part(&name);

        if local.contains('.') {
            let google_id = rng
                .random_range(100_000_000_000_000_000_u64..1_000_000_000_000_000_000)
                .to_string();
            return Ok(ExampleUserSeed {
                id,
                google_id,
                email: format!("{local}@example.com"),
                name,
                picture: Some(format!("https://example.com/avatars/{id}.jpg")),
            });
        }
    }

    Err(GenerationError::OwnerNameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

fn generate_single_recipe(rng: &mut ChaCha8Rng, tags: &[String]) -> ExampleRecipeSeed {
    let id = Uuid::from_u128(rng.random());
    let name = format!(
        "{} {} {}",
        pick(rng, ADJECTIVES),
        pick(rng, STAPLES),
        pick(rng, DISHES)
    );

    let description = rng
        .random_ratio(DESCRIPTION_NUMERATOR, DESCRIPTION_DENOMINATOR)
        .then(|| pick(rng, DESCRIPTIONS).to_owned());

    let ingredients = select_subset(rng, INGREDIENTS, MIN_INGREDIENTS, MAX_INGREDIENTS)
        .into_iter()
        .map(|ingredient| format!("{} {ingredient}", pick(rng, QUANTITIES)))
        .collect();

    // Steps keep their cooking order.
    let mut step_positions: Vec<usize> = (0..STEPS.len()).collect();
    step_positions.shuffle(rng);
    let step_count = rng.random_range(MIN_STEPS..=MAX_STEPS);
    step_positions.truncate(step_count);
    step_positions.sort_unstable();
    let instructions = step_positions
        .into_iter()
        .filter_map(|position| STEPS.get(position))
        .map(|&step| step.to_owned())
        .collect();

    let prep_time = rng.random_range(5..=60_i64);
    let cook_time = rng.random_range(0..=240_i64);
    let servings = rng.random_range(1..=12_i64);
    let tags = select_subset(rng, tags, MIN_TAGS, MAX_TAGS);

    let image = rng
        .random_ratio(IMAGE_NUMERATOR, IMAGE_DENOMINATOR)
        .then(|| format!("https://example.com/images/recipes/{id}.jpg"));
    let is_favorite = rng.random_ratio(FAVORITE_NUMERATOR, FAVORITE_DENOMINATOR);

    let created_days_ago = rng.random_range(0..=MAX_AGE_DAYS);
    let updated_days_ago = rng.random_range(0..=created_days_ago);

    ExampleRecipeSeed {
        id,
        name,
        description,
        ingredients,
        instructions,
        prep_time,
        cook_time,
        servings,
        tags,
        image,
        is_favorite,
        created_days_ago,
        updated_days_ago,
    }
}

fn pick(rng: &mut ChaCha8Rng, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Selects a deterministic subset of items from the provided slice.
///
/// The selection count is determined by the RNG state, bounded by `min_count`
/// and `max_count`. If the source slice has fewer elements than `max_count`,
/// all elements may be selected.
fn select_subset<T: Clone>(
    rng: &mut ChaCha8Rng,
    items: &[T],
    min_count: usize,
    max_count: usize,
) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }

    let clamped_min = min_count.min(items.len());
    let clamped_max = max_count.min(items.len());

    let count = if clamped_min == clamped_max {
        clamped_min
    } else {
        rng.random_range(clamped_min..=clamped_max)
    };

    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
