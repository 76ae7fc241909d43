//! Recipe request payloads.

use serde::{Deserialize, Serialize};

use crate::domain::Recipe;

/// Payload of `POST /api/recipes`.
///
/// On the wire `name, ingredients, instructions, prepTime, cookTime,
/// servings` and `tags` are required; `description`, `image` and
/// `isFavorite` are optional. In code, [`CreateRecipeDto::new`] fills the
/// remaining fields with their defaults (no time, one serving, no tags).
///
/// # Examples
/// ```
/// use recipe_kit::dto::CreateRecipeDto;
///
/// let dto = CreateRecipeDto {
///     prep_time: 10,
///     ..CreateRecipeDto::new("Toast", vec!["Bread".into()], vec!["Toast it".into()])
/// };
/// assert_eq!(dto.servings, 1);
/// assert!(dto.tags.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeDto {
    /// Recipe name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ingredients in order.
    pub ingredients: Vec<String>,
    /// Instruction steps in order.
    pub instructions: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time: i64,
    /// Cooking time in minutes.
    pub cook_time: i64,
    /// Number of servings.
    pub servings: i64,
    /// Tags in order.
    pub tags: Vec<String>,
    /// Image URL or inline-encoded image data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Initial favourite flag; the entity defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl CreateRecipeDto {
    /// Build a request with the required content and default settings.
    #[must_use]
    pub fn new(name: impl Into<String>, ingredients: Vec<String>, instructions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            ingredients,
            instructions,
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            tags: Vec::new(),
            image: None,
            is_favorite: None,
        }
    }
}

/// Payload of `PUT /api/recipes/{id}`.
///
/// Every field is optional. An absent field leaves the stored value
/// unchanged; a present but empty value (for example `"description": ""`) is
/// an explicit change. JSON `null` is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeDto {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement ingredient list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Replacement instruction list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    /// New preparation time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<i64>,
    /// New cooking time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<i64>,
    /// New number of servings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<i64>,
    /// Replacement tag list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// New favourite flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl UpdateRecipeDto {
    /// `true` when at least one field is present.
    ///
    /// # Examples
    /// ```
    /// use recipe_kit::dto::UpdateRecipeDto;
    ///
    /// assert!(!UpdateRecipeDto::default().has_updates());
    /// let rename = UpdateRecipeDto { name: Some("Soup".into()), ..UpdateRecipeDto::default() };
    /// assert!(rename.has_updates());
    /// ```
    #[must_use]
    pub const fn has_updates(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.ingredients.is_some()
            || self.instructions.is_some()
            || self.prep_time.is_some()
            || self.cook_time.is_some()
            || self.servings.is_some()
            || self.tags.is_some()
            || self.image.is_some()
            || self.is_favorite.is_some()
    }
}

/// Full snapshot of a recipe as an update: every field present, except the
/// optional ones the recipe does not carry.
impl From<&Recipe> for UpdateRecipeDto {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: Some(recipe.name().to_owned()),
            description: recipe.description().map(str::to_owned),
            ingredients: Some(recipe.ingredients().to_vec()),
            instructions: Some(recipe.instructions().to_vec()),
            prep_time: Some(recipe.prep_time()),
            cook_time: Some(recipe.cook_time()),
            servings: Some(recipe.servings()),
            tags: Some(recipe.tags().to_vec()),
            image: recipe.image().map(str::to_owned),
            is_favorite: Some(recipe.is_favorite()),
        }
    }
}
