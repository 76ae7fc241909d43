//! Error types for the example-data crate.
//!
//! Registry parsing and recipe generation fail in different ways, so each
//! has its own `thiserror` enum.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// A tag in the registry is blank.
    #[error("invalid tag at index {index}: {value:?}")]
    InvalidTag {
        /// Index of the invalid tag in the array.
        index: usize,
        /// The rejected tag text.
        value: String,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during recipe generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate an owner name usable in an email address.
    #[error("failed to generate a usable owner name after {max_attempts} attempts")]
    OwnerNameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// The registry contains no tags for selection.
    #[error("registry contains no tags for selection")]
    NoTags,

    /// The seed asks for more recipes than one run may generate.
    #[error("seed requests {requested} recipes, more than the maximum of {max}")]
    TooManyRecipes {
        /// Requested recipe count.
        requested: usize,
        /// Largest accepted count.
        max: usize,
    },

    /// A generated recipe fell outside the recipe bounds.
    #[error("generated recipe at index {index} violates recipe bounds")]
    InvalidRecipe {
        /// Position of the offending recipe in the generated set.
        index: usize,
    },
}
