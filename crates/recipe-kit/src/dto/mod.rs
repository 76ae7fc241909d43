//! Data transfer objects exchanged at the API boundary.
//!
//! DTOs are plain data with public fields. They carry no invariants of their
//! own; request payloads are checked by [`crate::validation`] before use.

mod envelope;
mod recipe;
mod user;

pub use self::envelope::{BAD_REQUEST, ErrorResponse, SuccessResponse};
pub use self::recipe::{CreateRecipeDto, UpdateRecipeDto};
pub use self::user::CurrentUserDto;
