//! Deterministic example recipe data for demonstration purposes.
//!
//! This crate provides believable, reproducible recipes and users, either
//! from a fixed catalogue or generated from a JSON seed registry. It is
//! independent of `recipe-kit` domain types to avoid circular dependencies;
//! the recipe bounds are mirrored in [`is_valid_recipe_seed`] instead.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A fixed catalogue of three sample recipes and their owner
//! - Loading seed registries from JSON files
//! - Deterministic recipe generation using named seeds
//! - Recipe bounds matching the `recipe-kit` validator
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_data, is_valid_recipe_seed};
//!
//! let json = r#"{
//!     "version": 1,
//!     "tags": ["dinner", "vegetarian"],
//!     "seeds": [{"name": "test-seed", "seed": 42, "recipeCount": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let data = generate_example_data(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(data.recipes.len(), 3);
//! assert!(data.recipes.iter().all(is_valid_recipe_seed));
//! ```

mod catalogue;
mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use catalogue::{SAMPLE_USER_ID, sample_recipes, sample_user};
pub use error::{GenerationError, RegistryError};
pub use generator::{MAX_RECIPE_COUNT, generate_example_data};
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{ExampleDataSet, ExampleRecipeSeed, ExampleUserSeed};
pub use validation::{
    DESCRIPTION_MAX, LIST_MAX, RECIPE_NAME_MAX, SERVINGS_MAX, TIME_MAX, is_valid_recipe_seed,
};
