//! Turning example-data seeds into recipe-kit entities.

use chrono::{DateTime, Days, Utc};
use example_data::{
    ExampleDataSet, ExampleRecipeSeed, ExampleUserSeed, GenerationError, MAX_RECIPE_COUNT,
    RegistryError, SeedDefinition, SeedRegistry, generate_example_data, sample_recipes,
    sample_user,
};
use mockable::Clock;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::codec::iso8601;
use crate::domain::{
    Recipe, RecipeId, RecipeInvariantError, User, UserId, ValidationError,
};
use crate::dto::UpdateRecipeDto;
use crate::example_data::config::SampleDataSettings;
use crate::validation::validate_update;

/// Errors returned while producing sample data.
#[derive(Debug, Error)]
pub enum SampleDataError {
    /// The seed registry could not be loaded or queried.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Seed generation failed.
    #[error("sample generation error: {0}")]
    Generation(#[from] GenerationError),
    /// A seed's age reaches before the representable date range.
    #[error("sample recipe '{name}' is {days} days old, which is out of range")]
    AgeOutOfRange {
        /// Recipe name.
        name: String,
        /// Requested age in days.
        days: u16,
    },
    /// A converted recipe broke an entity invariant.
    #[error("sample recipe '{name}' is inconsistent: {source}")]
    Invariant {
        /// Recipe name.
        name: String,
        /// Underlying invariant failure.
        #[source]
        source: RecipeInvariantError,
    },
    /// A converted recipe failed request validation.
    #[error("sample recipe '{name}' is invalid: {source}")]
    Rejected {
        /// Recipe name.
        name: String,
        /// First failing rule.
        #[source]
        source: ValidationError,
    },
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
    /// The recipe count override exceeds the generation limit.
    #[error("recipe count {requested} exceeds the maximum of {max}")]
    CountTooLarge {
        /// Requested recipe count.
        requested: usize,
        /// Largest accepted count.
        max: usize,
    },
}

/// A sample owner and the recipes they own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSet {
    /// Owner of every recipe.
    pub owner: User,
    /// Recipes in generation order.
    pub recipes: Vec<Recipe>,
}

/// The fixed catalogue: John Doe and three recipes, stamped at the clock's
/// current time.
///
/// # Errors
///
/// Returns [`SampleDataError`] if a catalogue entry fails conversion.
///
/// # Examples
/// ```
/// use mockable::DefaultClock;
/// use recipe_kit::example_data::catalogue;
///
/// let samples = catalogue(&DefaultClock).expect("catalogue converts");
/// assert_eq!(samples.owner.initials(), "JD");
/// assert_eq!(samples.recipes.len(), 3);
/// ```
pub fn catalogue(clock: &dyn Clock) -> Result<SampleSet, SampleDataError> {
    convert_set(
        ExampleDataSet {
            owner: sample_user(),
            recipes: sample_recipes(),
        },
        clock,
    )
}

/// Generate the sample set described by `settings`.
///
/// The registry is read from [`SampleDataSettings::registry_path`] and the
/// seed's recipe count is replaced by `settings.count` when set.
///
/// # Errors
///
/// Returns [`SampleDataError`] when the seed name is blank, the count
/// override is above [`MAX_RECIPE_COUNT`], the registry cannot be loaded, the
/// seed is unknown, or generation or conversion fails.
pub fn load_samples(
    settings: &SampleDataSettings,
    clock: &dyn Clock,
) -> Result<SampleSet, SampleDataError> {
    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(SampleDataError::EmptySeedName);
    }
    if let Some(requested) = settings.count.filter(|count| *count > MAX_RECIPE_COUNT) {
        return Err(SampleDataError::CountTooLarge {
            requested,
            max: MAX_RECIPE_COUNT,
        });
    }

    let registry = SeedRegistry::from_file(&settings.registry_path())?;
    let seed_def = registry.find_seed(seed_name)?;
    let recipe_count = settings.count.unwrap_or(seed_def.recipe_count());
    let seed_def = SeedDefinition::new(seed_def.name().to_owned(), seed_def.seed(), recipe_count);

    let data = generate_example_data(&registry, &seed_def)?;
    info!(
        seed_key = seed_def.name(),
        recipe_count, "sample recipes generated"
    );
    convert_set(data, clock)
}

fn convert_set(data: ExampleDataSet, clock: &dyn Clock) -> Result<SampleSet, SampleDataError> {
    let now = iso8601::now(clock);
    let owner = convert_user(data.owner, now);
    let recipes = data
        .recipes
        .into_iter()
        .map(|seed| convert_recipe(seed, owner.id(), now, clock))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SampleSet { owner, recipes })
}

/// Build a [`User`] from a seed, created and updated at `now`.
#[must_use]
pub fn convert_user(seed: ExampleUserSeed, now: DateTime<Utc>) -> User {
    let mut builder =
        User::builder(seed.google_id, seed.email, seed.name).id(UserId::from_uuid(seed.id));
    if let Some(picture) = seed.picture {
        builder = builder.picture(picture);
    }
    builder.build_at(now, now)
}

/// Build a [`Recipe`] owned by `owner` from a seed, placing its timestamps
/// the seed's number of days before `now`.
///
/// The result is also run through update validation, so a recipe that
/// converts cleanly is accepted by every request rule.
///
/// # Errors
///
/// Returns [`SampleDataError`] when an age is out of range, the timestamps
/// are inconsistent, or a rule rejects the recipe.
pub fn convert_recipe(
    seed: ExampleRecipeSeed,
    owner: UserId,
    now: DateTime<Utc>,
    clock: &dyn Clock,
) -> Result<Recipe, SampleDataError> {
    let created_at = days_before(now, seed.created_days_ago, &seed.name)?;
    let updated_at = days_before(now, seed.updated_days_ago, &seed.name)?;
    let name = seed.name.clone();

    let mut builder = Recipe::builder(seed.name, seed.ingredients, seed.instructions)
        .id(RecipeId::from_uuid(seed.id))
        .user_id(owner)
        .prep_time(seed.prep_time)
        .cook_time(seed.cook_time)
        .servings(seed.servings)
        .tags(seed.tags)
        .favorite(seed.is_favorite)
        .created_at(created_at)
        .updated_at(updated_at);
    if let Some(description) = seed.description {
        builder = builder.description(description);
    }
    if let Some(image) = seed.image {
        builder = builder.image(image);
    }

    let recipe = builder
        .build(clock)
        .map_err(|source| SampleDataError::Invariant {
            name: name.clone(),
            source,
        })?;
    validate_update(&UpdateRecipeDto::from(&recipe))
        .map_err(|source| SampleDataError::Rejected { name, source })?;
    Ok(recipe)
}

fn days_before(
    now: DateTime<Utc>,
    days: u16,
    name: &str,
) -> Result<DateTime<Utc>, SampleDataError> {
    now.checked_sub_days(Days::new(u64::from(days)))
        .ok_or_else(|| SampleDataError::AgeOutOfRange {
            name: name.to_owned(),
            days,
        })
}
