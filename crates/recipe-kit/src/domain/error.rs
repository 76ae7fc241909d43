//! Validation error taxonomy.
//!
//! A closed set of failure kinds, each carrying a message that can be shown
//! to end users as-is. Validation never nests causes; the message is the
//! whole payload.

use thiserror::Error;

/// Field-level validation failure.
///
/// # Examples
/// ```
/// use recipe_kit::domain::ValidationError;
///
/// let err = ValidationError::FieldRequired("Recipe name is required".to_owned());
/// assert_eq!(err.to_string(), "Recipe name is required");
/// assert_eq!(err.message(), "Recipe name is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// A mandatory field was absent or blank.
    #[error("{0}")]
    FieldRequired(String),
    /// A value is shorter than the minimum length.
    #[error("{0}")]
    FieldTooShort(String),
    /// A value is longer than the maximum length.
    #[error("{0}")]
    FieldTooLong(String),
    /// A value is well typed but outside the domain rules.
    #[error("{0}")]
    InvalidValue(String),
    /// A value does not match its expected format.
    ///
    /// Reserved for format checks such as email addresses; the recipe
    /// validator never produces it.
    #[error("{0}")]
    InvalidFormat(String),
}

/// Discriminant of a [`ValidationError`] without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// See [`ValidationError::FieldRequired`].
    FieldRequired,
    /// See [`ValidationError::FieldTooShort`].
    FieldTooShort,
    /// See [`ValidationError::FieldTooLong`].
    FieldTooLong,
    /// See [`ValidationError::InvalidValue`].
    InvalidValue,
    /// See [`ValidationError::InvalidFormat`].
    InvalidFormat,
}

impl ValidationErrorKind {
    /// Stable snake_case label, used as a structured logging field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FieldRequired => "field_required",
            Self::FieldTooShort => "field_too_short",
            Self::FieldTooLong => "field_too_long",
            Self::InvalidValue => "invalid_value",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

impl ValidationError {
    /// Human-readable message suitable for display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::FieldRequired(message)
            | Self::FieldTooShort(message)
            | Self::FieldTooLong(message)
            | Self::InvalidValue(message)
            | Self::InvalidFormat(message) => message.as_str(),
        }
    }

    /// Failure kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::FieldRequired(_) => ValidationErrorKind::FieldRequired,
            Self::FieldTooShort(_) => ValidationErrorKind::FieldTooShort,
            Self::FieldTooLong(_) => ValidationErrorKind::FieldTooLong,
            Self::InvalidValue(_) => ValidationErrorKind::InvalidValue,
            Self::InvalidFormat(_) => ValidationErrorKind::InvalidFormat,
        }
    }

    pub(crate) fn required(message: impl Into<String>) -> Self {
        Self::FieldRequired(message.into())
    }

    pub(crate) fn too_short(message: impl Into<String>) -> Self {
        Self::FieldTooShort(message.into())
    }

    pub(crate) fn too_long(message: impl Into<String>) -> Self {
        Self::FieldTooLong(message.into())
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ValidationError::FieldRequired("a".to_owned()), ValidationErrorKind::FieldRequired)]
    #[case(ValidationError::FieldTooShort("b".to_owned()), ValidationErrorKind::FieldTooShort)]
    #[case(ValidationError::FieldTooLong("c".to_owned()), ValidationErrorKind::FieldTooLong)]
    #[case(ValidationError::InvalidValue("d".to_owned()), ValidationErrorKind::InvalidValue)]
    #[case(ValidationError::InvalidFormat("e".to_owned()), ValidationErrorKind::InvalidFormat)]
    fn kind_matches_variant(#[case] err: ValidationError, #[case] expected: ValidationErrorKind) {
        assert_eq!(err.kind(), expected);
    }

    #[rstest]
    fn display_is_the_bare_message() {
        let err = ValidationError::invalid("Ingredient #2 cannot be empty");
        assert_eq!(err.to_string(), "Ingredient #2 cannot be empty");
        assert_eq!(err.message(), err.to_string());
    }

    #[rstest]
    fn kind_labels_are_snake_case() {
        assert_eq!(ValidationErrorKind::FieldTooLong.as_str(), "field_too_long");
        assert_eq!(ValidationErrorKind::InvalidFormat.as_str(), "invalid_format");
    }
}
