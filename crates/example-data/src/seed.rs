//! Generated recipe and user seed types.
//!
//! These types are independent of `recipe-kit` domain types so the two crates
//! do not depend on each other in a cycle. Consumers convert them into their
//! own entities at the point of use.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated example recipe record.
///
/// Timestamps are expressed relative to the moment the seed is turned into
/// an entity: `created_days_ago` and `updated_days_ago` count whole days back
/// from "now", with `updated_days_ago <= created_days_ago`.
///
/// # Example
///
/// ```
/// use example_data::ExampleRecipeSeed;
/// use uuid::Uuid;
///
/// let recipe = ExampleRecipeSeed {
///     id: Uuid::nil(),
///     name: "Porridge".to_owned(),
///     description: None,
///     ingredients: vec!["1 cup oats".to_owned()],
///     instructions: vec!["Simmer with milk".to_owned()],
///     prep_time: 2,
///     cook_time: 8,
///     servings: 1,
///     tags: vec!["breakfast".to_owned()],
///     image: None,
///     is_favorite: false,
///     created_days_ago: 3,
///     updated_days_ago: 1,
/// };
///
/// assert_eq!(recipe.name, "Porridge");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRecipeSeed {
    /// Unique identifier for the recipe.
    pub id: Uuid,
    /// Recipe title.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Ingredient lines in display order.
    pub ingredients: Vec<String>,
    /// Instruction steps in display order.
    pub instructions: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time: i64,
    /// Cooking time in minutes.
    pub cook_time: i64,
    /// Number of servings.
    pub servings: i64,
    /// Free-form labels.
    pub tags: Vec<String>,
    /// Optional image URL.
    pub image: Option<String>,
    /// Favourite flag.
    pub is_favorite: bool,
    /// Whole days between creation and now.
    pub created_days_ago: u16,
    /// Whole days between the last update and now.
    pub updated_days_ago: u16,
}

/// A generated example user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// Google account subject identifier.
    pub google_id: String,
    /// Email address.
    pub email: String,
    /// Full display name.
    pub name: String,
    /// Optional avatar URL.
    pub picture: Option<String>,
}

/// A generated owner together with the recipes they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDataSet {
    /// Owner of every recipe in the set.
    pub owner: ExampleUserSeed,
    /// Generated recipes.
    pub recipes: Vec<ExampleRecipeSeed>,
}
