//! Error body returned by the gateway on non-2xx responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{de::null_as_default, status::PaymentStatusCode};

/// Gateway error payload.
///
/// Only `code` identifies the failure; the remaining fields are diagnostics.
///
/// # Examples
///
/// ```
/// use rozetkapay::models::{ErrorResponse, PaymentStatusCode};
///
/// let body = r#"{"code":"insufficient_funds","message":"not enough money","type":"payment"}"#;
/// let response: ErrorResponse = serde_json::from_str(body)?;
///
/// assert_eq!(response.code, PaymentStatusCode::INSUFFICIENT_FUNDS);
/// assert_eq!(response.to_string(), "insufficient_funds");
/// assert!(response.param.is_empty());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// Gateway status code.
    #[serde(deserialize_with = "null_as_default")]
    pub code: PaymentStatusCode,
    /// Human-readable description.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Request parameter the error refers to, if any.
    #[serde(deserialize_with = "null_as_default")]
    pub param: String,
    /// Payment the error refers to, if any.
    #[serde(deserialize_with = "null_as_default")]
    pub payment_id: String,
    /// Error category.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code, f)
    }
}
