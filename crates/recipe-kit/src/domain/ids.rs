//! Opaque identifiers for recipes and users.
//!
//! Both identifiers wrap a 128-bit UUID. On the wire they are plain UUID
//! strings in the hyphenated 8-4-4-4-12 form; decoding accepts either letter
//! case and encoding always emits lowercase. The simple, braced and URN forms
//! are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Length of the hyphenated UUID form.
const HYPHENATED_LEN: usize = 36;

/// An identifier string that is not a hyphenated UUID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier '{input}': {reason}")]
pub struct IdParseError {
    input: String,
    reason: String,
}

fn parse_hyphenated(input: &str) -> Result<Uuid, IdParseError> {
    if input.len() != HYPHENATED_LEN {
        return Err(IdParseError {
            input: input.to_owned(),
            reason: "expected the hyphenated 8-4-4-4-12 form".to_owned(),
        });
    }
    Uuid::parse_str(input).map_err(|err| IdParseError {
        input: input.to_owned(),
        reason: err.to_string(),
    })
}

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hyphenated(s).map(Self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }
    };
}

uuid_identifier!(
    /// Stable recipe identifier. Assigned once and never changed.
    RecipeId
);

uuid_identifier!(
    /// Stable user identifier.
    UserId
);
