//! Transport layer.
//!
//! A [`Request`] is a fully resolved HTTP call (method, URL with query, JSON
//! body). The sealed [`Transport`] trait executes it and hands back the raw
//! status and body; classifying the outcome is left to [`Client`](crate::Client).
//!
//! # Examples
//!
//! ```
//! use reqwest::Method;
//! use rozetkapay::transport::Request;
//! use url::Url;
//!
//! # fn example() -> rozetkapay::Result<()> {
//! let url = Url::parse("https://api.rozetkapay.com/api/payments/v1/info")?;
//! let request = Request::new(Method::GET, url).query(&[("external_id", "ext-123")]);
//!
//! assert_eq!(request.url().query(), Some("external_id=ext-123"));
//! assert!(request.body().is_none());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;

use reqwest::{Method, header::HeaderMap};
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

pub mod config;
pub mod http;
mod sealed;

pub use config::HttpConfig;
pub use http::HttpTransport;

/// An HTTP call ready to be executed.
///
/// Headers are not caller-controlled; the client replaces them with the
/// content type and authorization pair on every send.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Creates a request without body or headers.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self { method, url, headers: HeaderMap::new(), body: None }
    }

    /// Sets the body to the JSON encoding of `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if `payload` cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(payload).map_err(Error::Serialization)?);
        Ok(self)
    }

    /// Appends URL-encoded query parameters.
    #[must_use]
    pub fn query<K: AsRef<str>, V: AsRef<str>>(mut self, pairs: &[(K, V)]) -> Self {
        if !pairs.is_empty() {
            let mut query = self.url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key.as_ref(), value.as_ref());
            }
        }
        self
    }

    /// HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Full URL including the query string.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Headers that will be sent.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Encoded body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub(crate) fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Raw response from a transport.
#[derive(Debug)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Whole response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Whether the status is in `200..=299`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Executes [`Request`]s.
///
/// This trait is sealed; [`HttpTransport`] is the only implementation.
pub trait Transport: sealed::private::Sealed + Send + Sync {
    /// Sends `request` and reads the whole response body.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if no response could be obtained.
    fn execute(&self, request: Request)
    -> impl Future<Output = Result<TransportResponse>> + Send + '_;
}
