//! Recipe bounds mirroring the `recipe-kit` validator.
//!
//! Generated recipes must always pass `recipe-kit` validation. The crate does
//! not depend on `recipe-kit`, so the bounds are repeated here and checked
//! against every generated seed.
//!
//! # Validation Rules
//!
//! - Name: non-blank, at most 255 characters after trimming
//! - Description: at most 5000 characters
//! - Ingredients and instructions: 1 to 100 entries, none blank
//! - Prep and cook time: 0 to 10080 minutes
//! - Servings: 1 to 1000

use crate::seed::ExampleRecipeSeed;

/// Maximum trimmed recipe name length, in characters.
pub const RECIPE_NAME_MAX: usize = 255;

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX: usize = 5000;

/// Maximum number of ingredients or instruction steps.
pub const LIST_MAX: usize = 100;

/// Maximum preparation or cooking time, in minutes.
pub const TIME_MAX: i64 = 10_080;

/// Maximum number of servings.
pub const SERVINGS_MAX: i64 = 1000;

/// Validates a recipe seed against the recipe bounds.
///
/// Also requires `updated_days_ago <= created_days_ago` so the converted
/// entity never has an update before its creation.
///
/// # Examples
///
/// ```
/// use example_data::{is_valid_recipe_seed, sample_recipes};
///
/// assert!(sample_recipes().iter().all(is_valid_recipe_seed));
/// ```
#[must_use]
pub fn is_valid_recipe_seed(recipe: &ExampleRecipeSeed) -> bool {
    let name_length = recipe.name.trim().chars().count();
    let description_ok = recipe
        .description
        .as_deref()
        .is_none_or(|text| text.chars().count() <= DESCRIPTION_MAX);

    (1..=RECIPE_NAME_MAX).contains(&name_length)
        && description_ok
        && is_valid_list(&recipe.ingredients)
        && is_valid_list(&recipe.instructions)
        && (0..=TIME_MAX).contains(&recipe.prep_time)
        && (0..=TIME_MAX).contains(&recipe.cook_time)
        && (1..=SERVINGS_MAX).contains(&recipe.servings)
        && recipe.updated_days_ago <= recipe.created_days_ago
}

fn is_valid_list(items: &[String]) -> bool {
    (1..=LIST_MAX).contains(&items.len()) && items.iter().all(|item| !item.trim().is_empty())
}

/// Turns a display name into an email local part.
///
/// Keeps ASCII letters and digits, lower-cased, and joins words with dots.
/// Returns an empty string when nothing usable remains.
#[must_use]
pub(crate) fn email_local_part(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
