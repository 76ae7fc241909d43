//! Request boundary: decode a raw payload, then validate it.
//!
//! Purpose: give server handlers and the command-line checker one pipeline
//! that turns request bytes into a validated DTO or into an
//! [`ErrorResponse`] ready to send back. Decode failures and validation
//! failures stay distinguishable until they are rendered.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::codec::{DecodeError, WIRE_CODEC};
use crate::domain::ValidationError;
use crate::dto::{BAD_REQUEST, CreateRecipeDto, ErrorResponse, UpdateRecipeDto};
use crate::validation::Validate;

/// Why a request payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    /// The payload is not well-formed or does not match the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The payload decoded but breaks a domain rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl BoundaryError {
    /// HTTP status reported for this rejection.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Decode(_) | Self::Validation(_) => BAD_REQUEST,
        }
    }
}

impl From<&BoundaryError> for ErrorResponse {
    fn from(error: &BoundaryError) -> Self {
        Self::with_status(error.to_string(), error.status_code())
    }
}

impl From<BoundaryError> for ErrorResponse {
    fn from(error: BoundaryError) -> Self {
        Self::from(&error)
    }
}

/// Decode and validate a `POST /api/recipes` body.
///
/// # Errors
///
/// [`BoundaryError::Decode`] for structural failures, otherwise
/// [`BoundaryError::Validation`] for the first failing rule.
///
/// # Examples
/// ```
/// use recipe_kit::boundary::decode_create_request;
/// use recipe_kit::dto::ErrorResponse;
///
/// let body = br#"{"name": "", "ingredients": ["Oats"], "instructions": ["Cook"],
///     "prepTime": 0, "cookTime": 5, "servings": 1, "tags": []}"#;
/// let err = decode_create_request(body).expect_err("blank name");
/// let response = ErrorResponse::from(err);
/// assert_eq!(response.error, "Recipe name is required");
/// assert_eq!(response.status_code, Some(400));
/// ```
pub fn decode_create_request(body: &[u8]) -> Result<CreateRecipeDto, BoundaryError> {
    decode_validated(body, "create")
}

/// Decode and validate a `PUT /api/recipes/{id}` body.
///
/// # Errors
///
/// [`BoundaryError::Decode`] for structural failures, otherwise
/// [`BoundaryError::Validation`] for the first failing rule.
pub fn decode_update_request(body: &[u8]) -> Result<UpdateRecipeDto, BoundaryError> {
    decode_validated(body, "update")
}

fn decode_validated<T>(body: &[u8], request: &'static str) -> Result<T, BoundaryError>
where
    T: DeserializeOwned + Validate,
{
    let dto: T = WIRE_CODEC.decode(body)?;
    if let Err(err) = dto.validate() {
        debug!(
            request,
            kind = err.kind().as_str(),
            message = err.message(),
            "request rejected by validation"
        );
        return Err(err.into());
    }
    Ok(dto)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::ValidationErrorKind;

    fn create_body() -> serde_json::Value {
        json!({
            "name": "Caesar Salad",
            "ingredients": ["Romaine lettuce", "Parmesan"],
            "instructions": ["Chop", "Toss"],
            "prepTime": 15,
            "cookTime": 0,
            "servings": 2,
            "tags": ["salad"],
        })
    }

    #[rstest]
    fn accepts_valid_create_body() {
        let dto = decode_create_request(create_body().to_string().as_bytes()).expect("valid body");
        assert_eq!(dto.name, "Caesar Salad");
        assert_eq!(dto.servings, 2);
    }

    #[rstest]
    fn malformed_create_body_is_a_decode_error() {
        let err = decode_create_request(b"{\"name\": ").expect_err("truncated");
        assert!(matches!(err, BoundaryError::Decode(_)));
        assert_eq!(ErrorResponse::from(&err).status_code, Some(400));
    }

    #[rstest]
    fn missing_required_key_is_a_decode_error() {
        let mut body = create_body();
        body.as_object_mut().expect("object").remove("servings");
        let err = decode_create_request(body.to_string().as_bytes()).expect_err("missing key");
        assert!(matches!(err, BoundaryError::Decode(DecodeError::Structure { .. })));
    }

    #[rstest]
    fn rule_violation_is_a_validation_error() {
        let mut body = create_body();
        body["servings"] = json!(0);
        let err = decode_create_request(body.to_string().as_bytes()).expect_err("invalid");
        let BoundaryError::Validation(inner) = &err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(inner.kind(), ValidationErrorKind::InvalidValue);
        let response = ErrorResponse::from(err);
        assert_eq!(response.error, "Servings must be at least 1");
        assert_eq!(response.status_code, Some(400));
    }

    #[rstest]
    fn empty_update_body_is_accepted() {
        let dto = decode_update_request(b"{}").expect("empty update");
        assert!(!dto.has_updates());
    }

    #[rstest]
    fn update_checks_present_fields() {
        let err = decode_update_request(br#"{"ingredients": ["Salt", " "]}"#)
            .expect_err("blank ingredient");
        assert_eq!(err.to_string(), "Ingredient #2 cannot be empty");
    }

    #[rstest]
    fn update_with_wrong_type_is_a_decode_error() {
        let err = decode_update_request(br#"{"servings": "four"}"#).expect_err("wrong type");
        assert!(err.to_string().starts_with("invalid payload"), "got {err}");
    }
}
