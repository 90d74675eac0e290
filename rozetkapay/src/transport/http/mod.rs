//! HTTP transport implementation using reqwest.

use reqwest::Client;
use tracing::instrument;

use super::config::HttpConfig;
use crate::{
    error::Result,
    transport::{Request, Transport, TransportResponse, sealed},
};

/// HTTP/1.1 transport using reqwest.
///
/// Clones share one connection pool.
///
/// # Examples
///
/// ```
/// use rozetkapay::transport::{HttpConfig, HttpTransport};
///
/// let config = HttpConfig { timeout_secs: 60, ..HttpConfig::default() };
/// let transport = HttpTransport::new(&config)?;
///
/// // Or bring a preconfigured client.
/// let transport = HttpTransport::from_client(reqwest::Client::new());
/// # Ok::<(), rozetkapay::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl sealed::private::Sealed for HttpTransport {}

impl HttpTransport {
    /// Creates a transport with its own client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if `config` is out of
    /// bounds, or [`Error::Http`](crate::Error::Http) if the client cannot be
    /// built.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an existing client, keeping its settings.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    #[instrument(
        skip(self, request),
        fields(method = %request.method(), path = request.url().path())
    )]
    async fn execute_request(&self, request: Request) -> Result<TransportResponse> {
        let Request { method, url, headers, body } = request;

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<TransportResponse> {
        self.execute_request(request).await
    }
}
