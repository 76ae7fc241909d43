//! Recipe request validation.
//!
//! Checks are pure and run in a fixed order, stopping at the first failure:
//! name, description, ingredients, instructions, time, servings. Every
//! failure is a single [`ValidationError`] whose message is part of the
//! public contract and may be shown to users verbatim.

mod rules;

pub use self::rules::{NotEmptyRule, RangeRule, ValidationRule};

use crate::domain::ValidationError;
use crate::dto::{CreateRecipeDto, UpdateRecipeDto};
use crate::text::is_blank;

/// Minimum trimmed name length, in characters.
pub const MIN_NAME_LENGTH: usize = 1;
/// Maximum trimmed name length, in characters.
pub const MAX_NAME_LENGTH: usize = 255;
/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;
/// Minimum number of ingredients.
pub const MIN_INGREDIENTS: usize = 1;
/// Maximum number of ingredients.
pub const MAX_INGREDIENTS: usize = 100;
/// Minimum number of instruction steps.
pub const MIN_INSTRUCTIONS: usize = 1;
/// Maximum number of instruction steps.
pub const MAX_INSTRUCTIONS: usize = 100;
/// Minimum servings.
pub const MIN_SERVINGS: i64 = 1;
/// Maximum servings.
pub const MAX_SERVINGS: i64 = 1000;
/// Minimum preparation or cooking time, in minutes.
pub const MIN_TIME: i64 = 0;
/// Maximum preparation or cooking time, in minutes (one week).
pub const MAX_TIME: i64 = 10_080;

/// Types that can be validated as a whole.
pub trait Validate {
    /// Run every applicable check in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for CreateRecipeDto {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_create(self)
    }
}

impl Validate for UpdateRecipeDto {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_update(self)
    }
}

/// Validate a create request. All six checks run.
///
/// # Errors
///
/// Returns the first failing check.
///
/// # Examples
/// ```
/// use recipe_kit::dto::CreateRecipeDto;
/// use recipe_kit::validation::validate_create;
///
/// let dto = CreateRecipeDto::new("Toast", vec!["Bread".into(), " ".into()], vec!["Toast".into()]);
/// let err = validate_create(&dto).expect_err("blank ingredient");
/// assert_eq!(err.message(), "Ingredient #2 cannot be empty");
/// ```
pub fn validate_create(dto: &CreateRecipeDto) -> Result<(), ValidationError> {
    validate_name(&dto.name)?;
    validate_description(dto.description.as_deref())?;
    validate_ingredients(&dto.ingredients)?;
    validate_instructions(&dto.instructions)?;
    validate_time(dto.prep_time, dto.cook_time)?;
    validate_servings(dto.servings)
}

/// Validate an update request. Only present fields are checked.
///
/// When only one of the two times is present it is checked with its twin
/// taken as zero. The merged recipe's total time is therefore not checked.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate_update(dto: &UpdateRecipeDto) -> Result<(), ValidationError> {
    if let Some(name) = &dto.name {
        validate_name(name)?;
    }
    validate_description(dto.description.as_deref())?;
    if let Some(ingredients) = &dto.ingredients {
        validate_ingredients(ingredients)?;
    }
    if let Some(instructions) = &dto.instructions {
        validate_instructions(instructions)?;
    }
    if dto.prep_time.is_some() || dto.cook_time.is_some() {
        validate_time(
            dto.prep_time.unwrap_or(MIN_TIME),
            dto.cook_time.unwrap_or(MIN_TIME),
        )?;
    }
    if let Some(servings) = dto.servings {
        validate_servings(servings)?;
    }
    Ok(())
}

/// Check a recipe name after trimming surrounding whitespace.
///
/// # Errors
///
/// `FieldRequired` when blank, `FieldTooShort` / `FieldTooLong` outside the
/// length bounds.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    NotEmptyRule::new("Recipe name").validate(name)?;
    let length = name.trim().chars().count();
    if length < MIN_NAME_LENGTH {
        return Err(ValidationError::too_short(format!(
            "Recipe name must be at least {MIN_NAME_LENGTH} character"
        )));
    }
    if length > MAX_NAME_LENGTH {
        return Err(ValidationError::too_long(format!(
            "Recipe name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Check an optional description. Absent and empty descriptions pass.
///
/// # Errors
///
/// `FieldTooLong` above the maximum length.
pub fn validate_description(description: Option<&str>) -> Result<(), ValidationError> {
    let Some(text) = description else {
        return Ok(());
    };
    if text.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::too_long(format!(
            "Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Check the ingredient list and each entry.
///
/// # Errors
///
/// `FieldRequired` when empty; `InvalidValue` for a count outside the bounds
/// or a blank entry (numbered from 1).
pub fn validate_ingredients(ingredients: &[String]) -> Result<(), ValidationError> {
    validate_list(
        ingredients,
        &ListMessages {
            required: "At least one ingredient is required",
            singular: "ingredient",
            plural: "ingredients",
            entry: "Ingredient",
            min: MIN_INGREDIENTS,
            max: MAX_INGREDIENTS,
        },
    )
}

/// Check the instruction list and each step.
///
/// # Errors
///
/// `FieldRequired` when empty; `InvalidValue` for a count outside the bounds
/// or a blank step (numbered from 1).
pub fn validate_instructions(instructions: &[String]) -> Result<(), ValidationError> {
    validate_list(
        instructions,
        &ListMessages {
            required: "At least one instruction step is required",
            singular: "instruction",
            plural: "instructions",
            entry: "Instruction",
            min: MIN_INSTRUCTIONS,
            max: MAX_INSTRUCTIONS,
        },
    )
}

/// Check preparation and cooking times.
///
/// Order: negative prep, negative cook, prep too long, cook too long.
///
/// # Errors
///
/// `InvalidValue` naming the offending time.
pub fn validate_time(prep_time: i64, cook_time: i64) -> Result<(), ValidationError> {
    if prep_time < MIN_TIME {
        return Err(ValidationError::invalid("Prep time cannot be negative"));
    }
    if cook_time < MIN_TIME {
        return Err(ValidationError::invalid("Cook time cannot be negative"));
    }
    if prep_time > MAX_TIME {
        return Err(ValidationError::invalid(format!(
            "Prep time cannot exceed {MAX_TIME} minutes"
        )));
    }
    if cook_time > MAX_TIME {
        return Err(ValidationError::invalid(format!(
            "Cook time cannot exceed {MAX_TIME} minutes"
        )));
    }
    Ok(())
}

/// Check the number of servings.
///
/// # Errors
///
/// `InvalidValue` outside the bounds.
pub fn validate_servings(servings: i64) -> Result<(), ValidationError> {
    if servings < MIN_SERVINGS {
        return Err(ValidationError::invalid(format!(
            "Servings must be at least {MIN_SERVINGS}"
        )));
    }
    if servings > MAX_SERVINGS {
        return Err(ValidationError::invalid(format!(
            "Servings cannot exceed {MAX_SERVINGS}"
        )));
    }
    Ok(())
}

struct ListMessages {
    required: &'static str,
    singular: &'static str,
    plural: &'static str,
    entry: &'static str,
    min: usize,
    max: usize,
}

fn validate_list(items: &[String], messages: &ListMessages) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::required(messages.required));
    }
    if items.len() < messages.min {
        return Err(ValidationError::invalid(format!(
            "Must have at least {} {}",
            messages.min, messages.singular
        )));
    }
    if items.len() > messages.max {
        return Err(ValidationError::invalid(format!(
            "Cannot exceed {} {}",
            messages.max, messages.plural
        )));
    }
    for (position, item) in (1_usize..).zip(items) {
        if is_blank(item) {
            return Err(ValidationError::invalid(format!(
                "{} #{position} cannot be empty",
                messages.entry
            )));
        }
    }
    Ok(())
}
