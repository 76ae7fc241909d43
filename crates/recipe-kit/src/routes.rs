//! Typed description of the HTTP routes clients call.
//!
//! Only paths and methods are described; no transport is provided.

use std::fmt;

use serde::Serialize;

use crate::domain::RecipeId;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const RECIPES: &str = "/api/recipes";
const RECIPE_TEMPLATE: &str = "/api/recipes/{id}";
const FAVORITE_TEMPLATE: &str = "/api/recipes/{id}/favorite";
const CURRENT_USER: &str = "/api/auth/me";
const LOGOUT: &str = "/api/auth/logout";
const GOOGLE_LOGIN: &str = "/api/auth/google";

/// A concrete request target: method plus path.
///
/// # Examples
/// ```
/// use recipe_kit::domain::RecipeId;
/// use recipe_kit::routes::{Endpoint, HttpMethod};
///
/// let id: RecipeId = "550e8400-e29b-41d4-a716-446655440000".parse().expect("uuid");
/// let endpoint = Endpoint::toggle_favorite(id);
/// assert_eq!(endpoint.method(), HttpMethod::Patch);
/// assert_eq!(
///     endpoint.path(),
///     "/api/recipes/550e8400-e29b-41d4-a716-446655440000/favorite"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    path: String,
    method: HttpMethod,
}

impl Endpoint {
    /// Endpoint for an arbitrary path and method.
    #[must_use]
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }

    /// `GET /api/recipes`
    #[must_use]
    pub fn list_recipes() -> Self {
        Self::new(RECIPES, HttpMethod::Get)
    }

    /// `GET /api/recipes/{id}`
    #[must_use]
    pub fn get_recipe(id: RecipeId) -> Self {
        Self::new(recipe_path(id), HttpMethod::Get)
    }

    /// `POST /api/recipes`
    #[must_use]
    pub fn create_recipe() -> Self {
        Self::new(RECIPES, HttpMethod::Post)
    }

    /// `PUT /api/recipes/{id}`
    #[must_use]
    pub fn update_recipe(id: RecipeId) -> Self {
        Self::new(recipe_path(id), HttpMethod::Put)
    }

    /// `DELETE /api/recipes/{id}`
    #[must_use]
    pub fn delete_recipe(id: RecipeId) -> Self {
        Self::new(recipe_path(id), HttpMethod::Delete)
    }

    /// `PATCH /api/recipes/{id}/favorite`
    #[must_use]
    pub fn toggle_favorite(id: RecipeId) -> Self {
        Self::new(format!("{}/favorite", recipe_path(id)), HttpMethod::Patch)
    }

    /// `GET /api/auth/me`
    #[must_use]
    pub fn current_user() -> Self {
        Self::new(CURRENT_USER, HttpMethod::Get)
    }

    /// `POST /api/auth/logout`
    #[must_use]
    pub fn logout() -> Self {
        Self::new(LOGOUT, HttpMethod::Post)
    }

    /// `GET /api/auth/google`
    #[must_use]
    pub fn google_login() -> Self {
        Self::new(GOOGLE_LOGIN, HttpMethod::Get)
    }

    /// Every route as a template, with `{id}` standing for a recipe id.
    #[must_use]
    pub fn routes() -> Vec<Self> {
        vec![
            Self::list_recipes(),
            Self::new(RECIPE_TEMPLATE, HttpMethod::Get),
            Self::create_recipe(),
            Self::new(RECIPE_TEMPLATE, HttpMethod::Put),
            Self::new(RECIPE_TEMPLATE, HttpMethod::Delete),
            Self::new(FAVORITE_TEMPLATE, HttpMethod::Patch),
            Self::current_user(),
            Self::logout(),
            Self::google_login(),
        ]
    }

    /// Request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Request method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

fn recipe_path(id: RecipeId) -> String {
    format!("{RECIPES}/{id}")
}
