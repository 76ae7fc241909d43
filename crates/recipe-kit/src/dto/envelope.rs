//! Response envelopes shared by every endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP status reported for rejected request payloads.
pub const BAD_REQUEST: u16 = 400;

/// Error body: `{error, statusCode?}`.
///
/// Displays as the bare message so it can be surfaced to users directly.
///
/// # Examples
/// ```
/// use recipe_kit::dto::ErrorResponse;
///
/// let response = ErrorResponse::with_status("Recipe name is required", 400);
/// assert_eq!(response.to_string(), "Recipe name is required");
/// assert_eq!(response.status_code, Some(400));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{error}")]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Status code, when the producer supplies one. Any JSON integer is
    /// accepted on decode, not only valid HTTP statuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
}

impl ErrorResponse {
    /// Error without a status code.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status_code: None,
        }
    }

    /// Error with a status code.
    #[must_use]
    pub fn with_status(error: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            status_code: Some(i64::from(status_code)),
        }
    }
}

/// Acknowledgement body for operations that return no data: `{success}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Whether the operation succeeded.
    pub success: bool,
}

impl SuccessResponse {
    /// Acknowledgement with an explicit outcome.
    #[must_use]
    pub const fn new(success: bool) -> Self {
        Self { success }
    }
}

impl Default for SuccessResponse {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::codec::WIRE_CODEC;

    #[rstest]
    fn error_without_status_omits_key() {
        let encoded = WIRE_CODEC
            .encode(&ErrorResponse::new("Servings cannot exceed 1000"))
            .expect("encode");
        insta::assert_snapshot!(encoded, @r#"
        {
          "error": "Servings cannot exceed 1000"
        }
        "#);
    }

    #[rstest]
    fn error_with_status_round_trips() {
        let response = ErrorResponse::with_status("Not found", 404);
        let encoded = WIRE_CODEC.encode(&response).expect("encode");
        assert!(encoded.contains("\"statusCode\": 404"));
        let decoded: ErrorResponse = WIRE_CODEC.decode_str(&encoded).expect("decode");
        assert_eq!(decoded, response);
    }

    #[rstest]
    #[case(r#"{"error": "Upstream failure", "statusCode": 70000}"#, Some(70_000))]
    #[case(r#"{"error": "Unknown", "statusCode": -1}"#, Some(-1))]
    #[case(r#"{"error": "Plain"}"#, None)]
    fn error_decodes_any_integer_status(#[case] body: &str, #[case] expected: Option<i64>) {
        let decoded: ErrorResponse = WIRE_CODEC.decode_str(body).expect("decode");
        assert_eq!(decoded.status_code, expected);
    }

    #[rstest]
    #[case(SuccessResponse::default(), true)]
    #[case(SuccessResponse::new(false), false)]
    fn success_flag(#[case] response: SuccessResponse, #[case] expected: bool) {
        assert_eq!(response.success, expected);
    }

    #[rstest]
    fn success_requires_flag_on_decode() {
        assert!(WIRE_CODEC.decode_str::<SuccessResponse>("{}").is_err());
    }
}
