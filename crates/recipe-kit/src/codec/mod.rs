//! Wire encoding and decoding shared by entities, DTOs and envelopes.
//!
//! Every payload goes through [`WIRE_CODEC`]:
//!
//! - timestamps are ISO-8601 text in UTC (see [`iso8601`]);
//! - object keys are emitted in lexicographic order at every nesting level;
//! - output is pretty-printed with two-space indentation;
//! - absent optional fields decode to `None`, missing required fields fail;
//! - unknown keys are ignored.
//!
//! Decoding failures are structural ([`DecodeError`]) and happen before any
//! validation runs.

pub mod iso8601;

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Structural failure while decoding a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input is not syntactically valid JSON.
    #[error("malformed JSON: {message}")]
    Syntax {
        /// Parser description, including the position.
        message: String,
    },
    /// The input ended before a complete JSON value was read.
    #[error("incomplete JSON: {message}")]
    Incomplete {
        /// Parser description, including the position.
        message: String,
    },
    /// Valid JSON that does not match the expected shape: a missing required
    /// key, a wrong type, an unparseable timestamp or a violated invariant.
    #[error("invalid payload: {message}")]
    Structure {
        /// Description of the mismatch.
        message: String,
    },
    /// The underlying reader failed.
    #[error("failed to read payload: {message}")]
    Io {
        /// Description of the I/O failure.
        message: String,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        match err.classify() {
            Category::Syntax => Self::Syntax { message },
            Category::Eof => Self::Incomplete { message },
            Category::Data => Self::Structure { message },
            Category::Io => Self::Io { message },
        }
    }
}

/// Failure while encoding a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to encode payload: {message}")]
pub struct EncodeError {
    message: String,
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Immutable encoder/decoder configuration.
///
/// There is one canonical configuration, [`WIRE_CODEC`]; share it by
/// reference.
///
/// # Examples
/// ```
/// use recipe_kit::codec::WIRE_CODEC;
/// use recipe_kit::dto::SuccessResponse;
///
/// let json = WIRE_CODEC.encode(&SuccessResponse::default()).expect("encode");
/// assert_eq!(json, "{\n  \"success\": true\n}");
///
/// let decoded: SuccessResponse = WIRE_CODEC.decode_str(&json).expect("decode");
/// assert!(decoded.success);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireCodec {
    indent: &'static [u8],
}

/// The canonical wire configuration.
pub const WIRE_CODEC: WireCodec = WireCodec::new();

impl Default for WireCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl WireCodec {
    /// Build the canonical configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { indent: b"  " }
    }

    /// Encode `value` as canonical JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the value cannot be represented as JSON.
    pub fn encode<T>(&self, value: &T) -> Result<String, EncodeError>
    where
        T: Serialize + ?Sized,
    {
        let bytes = self.encode_to_vec(value)?;
        String::from_utf8(bytes).map_err(|err| EncodeError {
            message: err.to_string(),
        })
    }

    /// Encode `value` as canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the value cannot be represented as JSON.
    pub fn encode_to_vec<T>(&self, value: &T) -> Result<Vec<u8>, EncodeError>
    where
        T: Serialize + ?Sized,
    {
        let tree = sort_keys(serde_json::to_value(value)?);
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(self.indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        tree.serialize(&mut serializer)?;
        Ok(out)
    }

    /// Decode a payload from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for malformed JSON or a shape mismatch.
    #[expect(
        clippy::unused_self,
        reason = "decoding has no tunable settings but stays on the codec value"
    )]
    pub fn decode<T>(&self, bytes: &[u8]) -> Result<T, DecodeError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(bytes).map_err(|err| {
            let decode_error = DecodeError::from(err);
            debug!(error = %decode_error, "payload decode failed");
            decode_error
        })
    }

    /// Decode a payload from text.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for malformed JSON or a shape mismatch.
    pub fn decode_str<T>(&self, text: &str) -> Result<T, DecodeError>
    where
        T: DeserializeOwned,
    {
        self.decode(text.as_bytes())
    }
}

/// Rebuild every object with its keys in lexicographic order.
///
/// Rebuilding by insertion keeps the order stable even when `serde_json` is
/// compiled with `preserve_order`.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(entries) => {
            let sorted: BTreeMap<String, Value> = entries
                .into_iter()
                .map(|(key, nested)| (key, sort_keys(nested)))
                .collect();
            let mut object = Map::new();
            for (key, nested) in sorted {
                object.insert(key, nested);
            }
            Value::Object(object)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
