//! Reusable single-value validation rules.

use std::fmt::Display;

use crate::domain::ValidationError;

/// A check applied to one value.
pub trait ValidationRule {
    /// Type of the value under test.
    type Value: ?Sized;

    /// Check `value`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] describing the first failure.
    fn validate(&self, value: &Self::Value) -> Result<(), ValidationError>;
}

/// Rejects text that is empty once surrounding whitespace is trimmed.
///
/// # Examples
/// ```
/// use recipe_kit::validation::{NotEmptyRule, ValidationRule};
///
/// let rule = NotEmptyRule::new("Tag");
/// assert!(rule.validate("dinner").is_ok());
/// let err = rule.validate("   ").expect_err("blank");
/// assert_eq!(err.message(), "Tag is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotEmptyRule {
    field_name: String,
}

impl NotEmptyRule {
    /// Rule for the named field.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl ValidationRule for NotEmptyRule {
    type Value = str;

    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::required(format!(
                "{} is required",
                self.field_name
            )));
        }
        Ok(())
    }
}

/// Accepts values within an inclusive range.
///
/// # Examples
/// ```
/// use recipe_kit::validation::{RangeRule, ValidationRule};
///
/// let rule = RangeRule::new("Rating", 1, 5);
/// assert!(rule.validate(&5).is_ok());
/// let err = rule.validate(&6).expect_err("out of range");
/// assert_eq!(err.message(), "Rating must be between 1 and 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRule<T> {
    field_name: String,
    min: T,
    max: T,
}

impl<T> RangeRule<T> {
    /// Rule accepting `min..=max` for the named field.
    #[must_use]
    pub fn new(field_name: impl Into<String>, min: T, max: T) -> Self {
        Self {
            field_name: field_name.into(),
            min,
            max,
        }
    }
}

impl<T> ValidationRule for RangeRule<T>
where
    T: PartialOrd + Display,
{
    type Value = T;

    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if *value < self.min || *value > self.max {
            return Err(ValidationError::invalid(format!(
                "{} must be between {} and {}",
                self.field_name, self.min, self.max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ValidationErrorKind;

    #[rstest]
    #[case("")]
    #[case(" \t\n")]
    fn not_empty_rejects_blank(#[case] value: &str) {
        let err = NotEmptyRule::new("Recipe name")
            .validate(value)
            .expect_err("blank value");
        assert_eq!(err.kind(), ValidationErrorKind::FieldRequired);
        assert_eq!(err.message(), "Recipe name is required");
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(1000, true)]
    #[case(1001, false)]
    fn range_is_inclusive(#[case] value: i64, #[case] accepted: bool) {
        let rule = RangeRule::new("Servings", 1_i64, 1000);
        assert_eq!(rule.validate(&value).is_ok(), accepted);
    }

    #[rstest]
    fn range_reports_bounds() {
        let err = RangeRule::new("Prep time", 0_i64, 10_080)
            .validate(&-1)
            .expect_err("below range");
        assert_eq!(err.kind(), ValidationErrorKind::InvalidValue);
        assert_eq!(err.message(), "Prep time must be between 0 and 10080");
    }
}
