//! Domain primitives and entities.
//!
//! Purpose: Define the canonical records exchanged between clients and
//! servers. Entities are immutable values; updates produce new values.
//!
//! Public surface:
//! - RecipeId, UserId (from `ids`): UUID-backed identifiers.
//! - Recipe (alias to `recipe::Recipe`): recipe record with derived values.
//! - User (alias to `user::User`): authenticated user with initials.
//! - ValidationError (alias to `error::ValidationError`): field-level
//!   failure taxonomy shared by validation and the request boundary.

pub mod error;
pub mod ids;
pub mod recipe;
pub mod user;

pub use self::error::{ValidationError, ValidationErrorKind};
pub use self::ids::{IdParseError, RecipeId, UserId};
pub use self::recipe::{Recipe, RecipeBuilder, RecipeInvariantError};
pub use self::user::{User, UserBuilder};
