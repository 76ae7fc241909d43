//! Recipe entity.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::iso8601;
use crate::domain::{RecipeId, UserId};
use crate::dto::{CreateRecipeDto, UpdateRecipeDto};
use crate::time_format::format_duration_minutes;

/// Invariant violations detected while assembling a [`Recipe`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeInvariantError {
    /// The last-update timestamp precedes the creation timestamp.
    #[error("updatedAt ({updated_at}) must not be earlier than createdAt ({created_at})")]
    TimestampsOutOfOrder {
        /// Creation timestamp.
        created_at: DateTime<Utc>,
        /// Offending last-update timestamp.
        updated_at: DateTime<Utc>,
    },
}

/// Canonical recipe record.
///
/// ## Invariants
/// - `id` never changes once assigned; updates produce a new value with the
///   same id.
/// - `created_at <= updated_at`.
/// - Ingredients, instructions and tags keep their insertion order.
///
/// Total time, its display string, the ingredient and step counts and
/// [`Recipe::has_image`] are computed on read and never serialised.
///
/// ## Wire form
/// `id, userId?, name, description?, ingredients, instructions, prepTime,
/// cookTime, servings, tags, image?, isFavorite, createdAt, updatedAt`.
/// Absent optionals are omitted when encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecipeWire", into = "RecipeWire")]
pub struct Recipe {
    id: RecipeId,
    user_id: Option<UserId>,
    name: String,
    description: Option<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    prep_time: i64,
    cook_time: i64,
    servings: i64,
    tags: Vec<String>,
    image: Option<String>,
    is_favorite: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Start building a recipe from its required content.
    ///
    /// Unset fields take the defaults documented on [`RecipeBuilder`].
    ///
    /// # Examples
    /// ```
    /// use mockable::DefaultClock;
    /// use recipe_kit::domain::Recipe;
    ///
    /// let recipe = Recipe::builder("Porridge", vec!["Oats".into()], vec!["Simmer".into()])
    ///     .prep_time(5)
    ///     .cook_time(10)
    ///     .build(&DefaultClock)
    ///     .expect("timestamps default to now");
    /// assert_eq!(recipe.total_time(), 15);
    /// assert_eq!(recipe.servings(), 1);
    /// ```
    pub fn builder(
        name: impl Into<String>,
        ingredients: Vec<String>,
        instructions: Vec<String>,
    ) -> RecipeBuilder {
        RecipeBuilder::new(name.into(), ingredients, instructions)
    }

    /// Build a fresh recipe from an already validated create request.
    ///
    /// The recipe receives a random id and both timestamps are the current
    /// clock time. `is_favorite` defaults to `false` when the request omits it.
    #[must_use]
    pub fn from_create(dto: CreateRecipeDto, owner: Option<UserId>, clock: &dyn Clock) -> Self {
        let now = iso8601::now(clock);
        let CreateRecipeDto {
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
        } = dto;
        Self {
            id: RecipeId::random(),
            user_id: owner,
            name,
            description,
            ingredients,
            instructions,
            prep_time,
            cook_time,
            servings,
            tags,
            image,
            is_favorite: is_favorite.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }

    /// Return a copy with every present field of `update` applied.
    ///
    /// Absent fields keep their current value. Identity, owner and creation
    /// time never change. When the update carries at least one field the new
    /// `updated_at` is the clock time, clamped so it never precedes
    /// `created_at`; an empty update returns an unchanged copy.
    ///
    /// The update should be validated first. Validation of a lone time field
    /// treats its twin as zero, so the merged total is not re-checked here.
    #[must_use]
    pub fn apply_update(&self, update: UpdateRecipeDto, clock: &dyn Clock) -> Self {
        if !update.has_updates() {
            return self.clone();
        }
        let UpdateRecipeDto {
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
        } = update;
        Self {
            id: self.id,
            user_id: self.user_id,
            name: name.unwrap_or_else(|| self.name.clone()),
            description: description.or_else(|| self.description.clone()),
            ingredients: ingredients.unwrap_or_else(|| self.ingredients.clone()),
            instructions: instructions.unwrap_or_else(|| self.instructions.clone()),
            prep_time: prep_time.unwrap_or(self.prep_time),
            cook_time: cook_time.unwrap_or(self.cook_time),
            servings: servings.unwrap_or(self.servings),
            tags: tags.unwrap_or_else(|| self.tags.clone()),
            image: image.or_else(|| self.image.clone()),
            is_favorite: is_favorite.unwrap_or(self.is_favorite),
            created_at: self.created_at,
            updated_at: self.touched_at(clock),
        }
    }

    /// Return a copy with the favourite flag set, as done by
    /// `PATCH /api/recipes/{id}/favorite`.
    #[must_use]
    pub fn with_favorite(&self, is_favorite: bool, clock: &dyn Clock) -> Self {
        Self {
            is_favorite,
            updated_at: self.touched_at(clock),
            ..self.clone()
        }
    }

    fn touched_at(&self, clock: &dyn Clock) -> DateTime<Utc> {
        iso8601::now(clock).max(self.created_at)
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> RecipeId {
        self.id
    }

    /// Owning user, when known.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Recipe name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Ingredients in insertion order.
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Instruction steps in insertion order.
    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Preparation time in minutes.
    #[must_use]
    pub const fn prep_time(&self) -> i64 {
        self.prep_time
    }

    /// Cooking time in minutes.
    #[must_use]
    pub const fn cook_time(&self) -> i64 {
        self.cook_time
    }

    /// Number of servings.
    #[must_use]
    pub const fn servings(&self) -> i64 {
        self.servings
    }

    /// Tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Image URL or inline-encoded image data.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Whether the owner marked the recipe as a favourite.
    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last update time.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Preparation plus cooking time, in minutes.
    #[must_use]
    pub const fn total_time(&self) -> i64 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Total time for display: `"2h 5m"`, `"2h"` or `"45m"`.
    #[must_use]
    pub fn total_time_formatted(&self) -> String {
        format_duration_minutes(self.total_time())
    }

    /// Number of ingredients.
    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Number of instruction steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.instructions.len()
    }

    /// `true` when an image is present and non-empty.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|image| !image.is_empty())
    }
}

/// Builder for [`Recipe`].
///
/// Defaults: random id, no owner, no description, prep and cook time `0`,
/// one serving, no tags, no image, not a favourite. Missing timestamps are
/// taken from the clock passed to [`RecipeBuilder::build`].
#[derive(Debug, Clone)]
#[must_use]
pub struct RecipeBuilder {
    id: Option<RecipeId>,
    user_id: Option<UserId>,
    name: String,
    description: Option<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    prep_time: i64,
    cook_time: i64,
    servings: i64,
    tags: Vec<String>,
    image: Option<String>,
    is_favorite: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl RecipeBuilder {
    const fn new(name: String, ingredients: Vec<String>, instructions: Vec<String>) -> Self {
        Self {
            id: None,
            user_id: None,
            name,
            description: None,
            ingredients,
            instructions,
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            tags: Vec::new(),
            image: None,
            is_favorite: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Use a known identifier instead of a random one.
    pub const fn id(mut self, id: RecipeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the owning user.
    pub const fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the preparation time in minutes.
    pub const fn prep_time(mut self, minutes: i64) -> Self {
        self.prep_time = minutes;
        self
    }

    /// Set the cooking time in minutes.
    pub const fn cook_time(mut self, minutes: i64) -> Self {
        self.cook_time = minutes;
        self
    }

    /// Set the number of servings.
    pub const fn servings(mut self, servings: i64) -> Self {
        self.servings = servings;
        self
    }

    /// Set the tags.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the image reference.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the favourite flag.
    pub const fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Set the creation time.
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the last update time.
    pub const fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Assemble the recipe.
    ///
    /// A missing `created_at` is the clock time; a missing `updated_at` is the
    /// later of the clock time and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeInvariantError::TimestampsOutOfOrder`] when explicit
    /// timestamps put `updated_at` before `created_at`.
    pub fn build(self, clock: &dyn Clock) -> Result<Recipe, RecipeInvariantError> {
        let now = iso8601::now(clock);
        let created_at = self.created_at.unwrap_or(now);
        let updated_at = self.updated_at.unwrap_or_else(|| now.max(created_at));
        check_timestamps(created_at, updated_at)?;
        Ok(Recipe {
            id: self.id.unwrap_or_else(RecipeId::random),
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            tags: self.tags,
            image: self.image,
            is_favorite: self.is_favorite,
            created_at,
            updated_at,
        })
    }
}

fn check_timestamps(
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Result<(), RecipeInvariantError> {
    if updated_at < created_at {
        return Err(RecipeInvariantError::TimestampsOutOfOrder {
            created_at,
            updated_at,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeWire {
    id: RecipeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    prep_time: i64,
    cook_time: i64,
    servings: i64,
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    is_favorite: bool,
    #[serde(with = "iso8601")]
    created_at: DateTime<Utc>,
    #[serde(with = "iso8601")]
    updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeWire {
    fn from(value: Recipe) -> Self {
        let Recipe {
            id,
            user_id,
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
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            user_id,
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
            created_at,
            updated_at,
        }
    }
}

impl TryFrom<RecipeWire> for Recipe {
    type Error = RecipeInvariantError;

    fn try_from(value: RecipeWire) -> Result<Self, Self::Error> {
        let RecipeWire {
            id,
            user_id,
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
            created_at,
            updated_at,
        } = value;
        check_timestamps(created_at, updated_at)?;
        Ok(Self {
            id,
            user_id,
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
            created_at,
            updated_at,
        })
    }
}
