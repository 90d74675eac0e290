//! Error types for the RozetkaPay client.
//!
//! All errors implement the standard [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Network Errors** ([`Error::Http`]): the request never produced an HTTP response
//! - **Gateway Errors** ([`Error::Gateway`], [`Error::EmptyResponse`]): non-2xx status
//! - **Codec Errors** ([`Error::Deserialization`], [`Error::Serialization`]): JSON bodies
//! - **Input Errors** ([`Error::InvalidUrl`], [`Error::InvalidRequest`], [`Error::Config`])
//!
//! # Examples
//!
//! ```
//! use rozetkapay::{
//!     Error,
//!     models::{ErrorResponse, PaymentStatusCode},
//! };
//!
//! let err = Error::Gateway {
//!     status: 400,
//!     response: ErrorResponse {
//!         code: PaymentStatusCode::TRANSACTION_DECLINED,
//!         ..ErrorResponse::default()
//!     },
//! };
//!
//! assert_eq!(err.to_string(), "transaction_declined");
//! assert_eq!(err.status_code(), Some(&PaymentStatusCode::TRANSACTION_DECLINED));
//! assert_eq!(err.http_status(), Some(400));
//! ```

use thiserror::Error;

use crate::models::{ErrorResponse, PaymentStatusCode};

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the RozetkaPay client.
///
/// Nothing is retried or swallowed; every failure of a call surfaces as one
/// of these variants.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed before a response was received.
    ///
    /// Covers DNS failures, refused connections, TLS errors and timeouts
    /// (default: 30 seconds).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-2xx status and an empty body.
    #[error("response is empty")]
    EmptyResponse {
        /// HTTP status code.
        status: u16,
    },

    /// The gateway answered with a non-2xx status and an error body.
    ///
    /// Displays as the bare gateway code, e.g. `transaction_declined`.
    #[error("{response}")]
    Gateway {
        /// HTTP status code.
        status: u16,
        /// Decoded error body.
        response: ErrorResponse,
    },

    /// A response or callback body was not the expected JSON.
    #[error("failed to decode response body: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// A request payload could not be encoded.
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A base URL or request path could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A request schema violates a gateway constraint.
    ///
    /// Raised before any network I/O.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Client configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Gateway status code, for [`Error::Gateway`].
    #[must_use]
    pub fn status_code(&self) -> Option<&PaymentStatusCode> {
        self.error_response().map(|response| &response.code)
    }

    /// Decoded gateway error body, for [`Error::Gateway`].
    #[must_use]
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Gateway { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status of a failed response.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Gateway { status, .. } | Self::EmptyResponse { status } => Some(*status),
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Whether the gateway failed with an empty body.
    #[must_use]
    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse { .. })
    }
}
